use clap::{CommandFactory, Parser, Subcommand};
use forgeflow_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "forgeflow", version, about = "Forge Flow workout log")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log, edit and complete workouts
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Completion counts for today, this week and this month
    Progress(commands::progress::ProgressArgs),
    /// Periodic workout goal
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Current consecutive-day streak
    Streak,
    /// Chart series for the current week, month or year
    Chart(commands::chart::ChartArgs),
    /// Suggestion profile (training goal, level, body parts)
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Suggest a workout from the saved profile
    Suggest,
    /// Display preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Reset all progress data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("FORGEFLOW_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(&config);

    let result = match cli.command {
        Commands::Workout { action } => commands::workout::run(action, &config),
        Commands::Progress(args) => commands::progress::run(args, &config),
        Commands::Goal { action } => commands::goal::run(action, &config),
        Commands::Streak => commands::streak::run(&config),
        Commands::Chart(args) => commands::chart::run(args, &config),
        Commands::Profile { action } => commands::profile::run(action, &config),
        Commands::Suggest => commands::profile::suggest(&config),
        Commands::Prefs { action } => commands::prefs::run(action, &config),
        Commands::Reset { yes } => commands::reset(yes, &config),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "forgeflow", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
