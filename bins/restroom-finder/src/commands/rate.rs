//! `rate`: submit a star rating

use crate::session::{Reported, Session};
use anyhow::Result;
use restroom_api_client::models::Rating;
use restroom_app::{AppError, Notification};
use restroom_cli::Status;
use tracing::info;

/// Validate `stars`, then submit
pub async fn run(
    config: Option<&str>,
    api_url: Option<&str>,
    bathroom_id: &str,
    stars: u8,
) -> Result<()> {
    let rating = Rating::new(stars).map_err(|e| restroom_core::Error::from(AppError::from(e)))?;

    let session = Session::open(config, api_url)?;
    match session.client().ratings().submit(bathroom_id, rating).await {
        Ok(ack) => {
            info!(bathroom_id, ack = ?ack.0, "Rating acknowledged");
            Status::notification(&Notification::rating_submitted());
            Ok(())
        }
        Err(e) => {
            Status::notification(&Notification::rating_failed());
            Err(Reported::from(AppError::Network(e)).into())
        }
    }
}
