//! Restroom Finder CLI
//!
//! Ranks nearby restrooms through the recommendation backend and renders
//! them as a list, a map summary or a detail card.

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use restroom_api_client::models::{Amenity, Urgency};
use restroom_core::error::exit_codes;
use restroom_geo::Coordinate;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod interactive;
mod session;

use commands::{detail, directions, nearby, rate, visit};
use session::Reported;

/// Find the best restroom near you
#[derive(Parser)]
#[command(name = "restroom-finder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<String>,

    /// Backend base URL (overrides RESTROOM_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Location and filter flags shared by the ranking commands
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Your position; falls back to [location] in the config file
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub at: Option<Coordinate>,

    /// Preferred amenity (wheelchair, baby_changing, gender_neutral, ...)
    #[arg(long = "prefer", value_name = "TAG")]
    pub prefer: Vec<Amenity>,

    /// How urgent it is (low, normal, high)
    #[arg(long, value_name = "LEVEL")]
    pub urgency: Option<Urgency>,
}

#[derive(Subcommand)]
enum Commands {
    /// List ranked restrooms near a location
    Nearby {
        #[command(flatten)]
        context: ContextArgs,

        /// Show the map summary instead of the list
        #[arg(long)]
        map: bool,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one restroom from the ranked list
    Detail {
        /// Position in the list, starting at 1
        index: usize,

        #[command(flatten)]
        context: ContextArgs,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rate a restroom from 1 to 5 stars
    Rate {
        /// Restroom identifier
        bathroom_id: String,

        /// Number of stars
        stars: u8,
    },

    /// Record a visit to a restroom
    Visit {
        /// Restroom identifier
        bathroom_id: String,
    },

    /// Print a walking directions link and the distance
    Directions {
        /// Starting point
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        at: Coordinate,

        /// Destination
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Browse, filter and rate in an interactive session
    Interactive {
        #[command(flatten)]
        context: ContextArgs,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "restroom=debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let api_url = cli.api_url.as_deref();
    let json_output = matches!(
        cli.command,
        Commands::Nearby { json: true, .. } | Commands::Detail { json: true, .. }
    );

    let result = match cli.command {
        Commands::Nearby { context, map, json } => {
            nearby::run(config, api_url, &context, map, json).await
        }
        Commands::Detail { index, context, json } => {
            detail::run(config, api_url, &context, index, json).await
        }
        Commands::Rate { bathroom_id, stars } => {
            rate::run(config, api_url, &bathroom_id, stars).await
        }
        Commands::Visit { bathroom_id } => visit::run(config, api_url, &bathroom_id).await,
        Commands::Directions { at, to } => directions::run(&at, &to),
        Commands::Interactive { context } => interactive::run(config, api_url, &context).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let core = core_error(&e);
            if let (true, Some(core)) = (json_output, core) {
                match serde_json::to_string_pretty(&core.to_report()) {
                    Ok(report) => println!("{report}"),
                    Err(_) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
            } else if let Some(reported) = e.downcast_ref::<Reported>() {
                // Shell failures were already shown as notifications.
                if let Some(suggestion) = &reported.0.suggestion {
                    eprintln!("  {} {}", "Hint:".dimmed(), suggestion);
                }
            } else {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }

            let code = core.map_or(exit_codes::FAILURE, |c| c.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// The coded error behind a command failure, if it has one
fn core_error(error: &anyhow::Error) -> Option<&restroom_core::Error> {
    error
        .downcast_ref::<Reported>()
        .map(|reported| &reported.0)
        .or_else(|| error.downcast_ref::<restroom_core::Error>())
}
