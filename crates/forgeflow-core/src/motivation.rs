//! Motivational lines shown after a workout is logged.

use rand::seq::SliceRandom;
use rand::Rng;

pub const QUOTES: &[&str] = &[
    "The only bad workout is the one you didn't do.",
    "Push harder than yesterday if you want a different tomorrow.",
    "Your body can do anything; it's your mind you need to convince.",
    "You don't rise from comfort. You rise from pressure that refuses to let you breathe until you change.",
    "In the Forge, pain isn't punishment. It's proof that you're still alive and still capable of more.",
    "The world doesn't care how tired you are. But the mirror will.",
    "Every rep is a question. Every drop of sweat is the answer.",
    "Be your own competition. You've already lost enough time trying to outshine others.",
    "When the mind breaks, the body follows. Forge both.",
    "You don't chase strength; you build it one refusal to quit at a time.",
    "Pressure shapes metal. Resistance shapes men.",
    "You can't beg for discipline, you either build it or stay broken.",
    "The pain that humbles you today will be the silence that makes others respect you tomorrow.",
    "Stop waiting for motivation. It's a guest that never comes. Build a home for consistency instead.",
    "Every time you feel weak, remember: fire doesn't fear being burned.",
    "The Forge doesn't create the strong, it reveals them.",
    "You won't always feel like it. But feelings don't lift weights, discipline does.",
    "You are both the blacksmith and the blade. The hammer is life, swing it.",
    "There's beauty in destruction when you're tearing down your limits.",
    "Even steel trembles before it's hardened.",
    "Don't pray for lighter burdens. Pray for a stronger back.",
    "You can't fake the fire in your eyes. The Forge knows.",
    "Every morning you rise is another chance to rewrite who you are.",
    "Go beyond, Plus Ultra!",
];

pub fn quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or_default()
}

pub fn random_quote() -> &'static str {
    quote(&mut rand::thread_rng())
}
