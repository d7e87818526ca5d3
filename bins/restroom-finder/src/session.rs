//! Per-invocation wiring: configuration, backend client, location and filters

use crate::ContextArgs;
use anyhow::Result;
use restroom_api_client::{ClientConfig, RestroomClient};
use restroom_app::location::FixedLocation;
use restroom_app::view::LOADING_MESSAGE;
use restroom_app::{AppError, AppShell, FilterState, ShellEvent};
use restroom_cli::progress;
use restroom_cli::TerminalNotifier;
use restroom_core::config::Config;
use restroom_geo::Coordinate;
use tracing::debug;

/// The shell as wired for the terminal
pub type Shell = AppShell<RestroomClient, FixedLocation, TerminalNotifier>;

/// A failure the user has already seen as a notification
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Reported(pub restroom_core::Error);

impl From<AppError> for Reported {
    fn from(err: AppError) -> Self {
        Self(err.into())
    }
}

/// Loaded configuration plus a ready client
pub struct Session {
    config: Config,
    client: RestroomClient,
}

impl Session {
    /// Load the config file and build the client.
    ///
    /// The base URL resolves as `--api-url` > `RESTROOM_API_URL` > file > default.
    pub fn open(config_path: Option<&str>, api_url: Option<&str>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let client_config = ClientConfig::from_sources(api_url, &config.schema.api)
            .map_err(restroom_core::Error::from)?;
        debug!(
            base_url = %client_config.base_url,
            config_file = ?config.path,
            "Session opened"
        );
        let client = RestroomClient::with_config(client_config).map_err(restroom_core::Error::from)?;
        Ok(Self { config, client })
    }

    /// Backend client
    pub fn client(&self) -> &RestroomClient {
        &self.client
    }

    /// `--at`, else the `[location]` table
    pub fn location(&self, args: &ContextArgs) -> Option<Coordinate> {
        args.at
            .or_else(|| self.config.schema.location.pair().map(Coordinate::from))
    }

    /// Config defaults, overridden by `--prefer` and `--urgency`
    pub fn filters(&self, args: &ContextArgs) -> FilterState {
        let defaults = FilterState::from_config(&self.config.schema.defaults);
        if args.prefer.is_empty() && args.urgency.is_none() {
            return defaults;
        }

        let preferences = if args.prefer.is_empty() {
            defaults.preferences().clone()
        } else {
            args.prefer.iter().cloned().collect()
        };
        FilterState::new(preferences, args.urgency.unwrap_or(defaults.urgency()))
    }

    /// A fresh shell for this invocation.
    ///
    /// Without a location the provider reports permission as denied.
    pub fn shell(&self, args: &ContextArgs) -> Shell {
        AppShell::new(
            self.client.clone(),
            FixedLocation::new(self.location(args)),
            TerminalNotifier,
        )
        .with_filters(self.filters(args))
    }
}

/// Dispatch `Start` behind a spinner
pub async fn start(shell: &mut Shell) -> Result<(), Reported> {
    let pb = progress::spinner(LOADING_MESSAGE);
    let result = shell.dispatch(ShellEvent::Start).await;
    progress::finish_clear(&pb);
    result.map_err(Reported::from)
}
