use forgeflow_core::Config;

use super::{print_json, CliResult, Session};

pub fn run(config: &Config) -> CliResult {
    let session = Session::open(config)?;
    let streak = session.state.streak;
    eprintln!("{streak}");
    print_json(&streak)
}
