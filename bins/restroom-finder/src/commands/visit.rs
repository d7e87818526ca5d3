//! `visit`: record a visit

use crate::session::Session;
use anyhow::Result;
use restroom_cli::Status;

/// Record a visit to `bathroom_id`
pub async fn run(config: Option<&str>, api_url: Option<&str>, bathroom_id: &str) -> Result<()> {
    let session = Session::open(config, api_url)?;
    let response = session
        .client()
        .visits()
        .record(bathroom_id)
        .await
        .map_err(restroom_core::Error::from)?;

    Status::success(&format!("Visit recorded ({})", response.status));
    Ok(())
}
