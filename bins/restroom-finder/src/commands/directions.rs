//! `directions`: walking link and straight-line distance, no backend call

use anyhow::Result;
use restroom_app::view::directions_url;
use restroom_cli::Status;
use restroom_geo::{distance_label, Coordinate};

/// Print the directions link from `at` to `to`
pub fn run(at: &Coordinate, to: &Coordinate) -> Result<()> {
    for coordinate in [at, to] {
        if !coordinate.is_valid() {
            return Err(restroom_core::Error::validation(format!(
                "Coordinate out of range: {coordinate}"
            ))
            .with_suggestion("Latitude must be within ±90 and longitude within ±180")
            .into());
        }
    }

    println!("{}", directions_url(at, to));
    Status::info(&format!("Straight-line distance: {}", distance_label(at, to)));
    Ok(())
}
