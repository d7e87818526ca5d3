//! HTTP client for the restroom finder backend
//!
//! The backend is an external service exposing a ranking endpoint and a
//! rating endpoint. This crate wraps both with typed request/response models.
//!
//! # Features
//!
//! - **Environment-based configuration**: base URL and timeout from env, file or CLI
//! - **Request correlation**: every request carries an `X-Request-ID`
//! - **Single exchange**: no retry, no caching; failures surface to the caller
//!
//! # Example
//!
//! ```rust,no_run
//! use restroom_api_client::{RestroomClient, ClientConfig};
//! use restroom_api_client::models::{UserContext, Urgency};
//! use restroom_geo::Coordinate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestroomClient::new()?;
//!
//!     let context = UserContext::now(
//!         Default::default(),
//!         Coordinate::new(33.6846, -117.8265),
//!         Urgency::Normal,
//!     );
//!     let ranked = client.ranking().top_bathrooms(&context).await?;
//!     println!("Got {} restrooms", ranked.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::RestroomClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::RestroomClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{RankingApi, RatingsApi, VisitsApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::models::{
        Amenity, BathroomRecord, CrowdLevel, Rating, Ratings, Urgency, UserContext,
    };
}
