//! Endpoint-specific API implementations
//!
//! | Module | Backend route | Description |
//! |--------|---------------|-------------|
//! | `ranking` | `POST /top-bathrooms` | Ranked restrooms for a user context |
//! | `ratings` | `POST /rate-bathroom` | Star rating submission |
//! | `visits` | `POST /record-visit` | Visit counter used by the ranker |

pub mod ranking;
pub mod ratings;
pub mod visits;

#[cfg(test)]
pub(crate) mod testing;

pub use ranking::RankingApi;
pub use ratings::RatingsApi;
pub use visits::VisitsApi;
