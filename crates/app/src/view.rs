//! Presentation models for the list, map and detail screens
//!
//! Everything here is a pure function of shell state. The mapping tables
//! (crowd colors, amenity icons) are shared by every front end.

use restroom_api_client::models::{Amenity, BathroomRecord, CrowdLevel};
use restroom_geo::{distance_label, format_tenths, Coordinate};
use serde::Serialize;

/// Header title
pub const APP_TITLE: &str = "Smart Restroom Finder";
/// Shown while a ranking request is in flight
pub const LOADING_MESSAGE: &str = "Finding best restrooms...";
/// Shown for an empty result list
pub const EMPTY_MESSAGE: &str = "No restrooms found nearby";
/// Distance placeholder while the user location is unknown
pub const DISTANCE_PENDING: &str = "Calculating...";

/// Map center when the user location is unknown (Irvine, CA)
pub const FALLBACK_CENTER: Coordinate = Coordinate {
    latitude: 33.6846,
    longitude: -117.8265,
};
/// Initial map span in degrees
pub const MAP_DELTA: f64 = 0.01;

// -----------------------------------------------------------------------------
// Mapping tables
// -----------------------------------------------------------------------------

/// Crowd badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdColor {
    /// `low`
    Green,
    /// `medium`
    Orange,
    /// `high`
    Red,
    /// Anything else
    Gray,
}

impl CrowdColor {
    /// Hex value used by the mobile theme
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#4CAF50",
            Self::Orange => "#FF9800",
            Self::Red => "#F44336",
            Self::Gray => "#757575",
        }
    }
}

/// Badge color for a crowd level
#[must_use]
pub fn crowd_color(level: &CrowdLevel) -> CrowdColor {
    match level {
        CrowdLevel::Low => CrowdColor::Green,
        CrowdLevel::Medium => CrowdColor::Orange,
        CrowdLevel::High => CrowdColor::Red,
        CrowdLevel::Unknown(_) => CrowdColor::Gray,
    }
}

/// Material icon name for an amenity tag
#[must_use]
pub fn amenity_icon(amenity: &Amenity) -> &'static str {
    match amenity {
        Amenity::Wheelchair => "accessible",
        Amenity::BabyChanging => "child-care",
        Amenity::GenderNeutral => "wc",
        Amenity::Other(_) => "check",
    }
}

/// Badge text for an amenity tag; only the first underscore becomes a space
#[must_use]
pub fn amenity_label(amenity: &Amenity) -> String {
    amenity.as_str().replacen('_', " ", 1)
}

/// Google Maps walking directions link
#[must_use]
pub fn directions_url(origin: &Coordinate, destination: &Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}",
        origin.latitude, origin.longitude, destination.latitude, destination.longitude
    )
}

// -----------------------------------------------------------------------------
// List
// -----------------------------------------------------------------------------

/// One amenity badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmenityBadge {
    /// Icon name
    pub icon: &'static str,
    /// Badge text
    pub label: String,
}

impl AmenityBadge {
    fn from_amenity(amenity: &Amenity) -> Self {
        Self {
            icon: amenity_icon(amenity),
            label: amenity_label(amenity),
        }
    }
}

/// One list row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BathroomCard {
    /// Position in the ranked list
    pub index: usize,
    /// Display name
    pub name: String,
    /// Overall score, one decimal
    pub overall: String,
    /// Distance from the user, or [`DISTANCE_PENDING`]
    pub distance: String,
    /// Crowd level text
    pub crowd: String,
    /// Crowd badge color
    pub crowd_color: CrowdColor,
    /// Amenity badges in record order
    pub amenities: Vec<AmenityBadge>,
    /// Cleanliness score as sent
    pub cleanliness: String,
    /// Safety score as sent
    pub safety: String,
    /// Opening hours text
    pub hours: String,
}

impl BathroomCard {
    /// Build a card for the record at `index`
    #[must_use]
    pub fn build(index: usize, record: &BathroomRecord, user: Option<&Coordinate>) -> Self {
        Self {
            index,
            name: record.name.clone(),
            overall: format_tenths(record.ratings.overall),
            distance: user.map_or_else(
                || DISTANCE_PENDING.to_string(),
                |u| distance_label(u, &record.coordinate()),
            ),
            crowd: record.crowd_updates.label().to_string(),
            crowd_color: crowd_color(&record.crowd_updates),
            amenities: record.amenities.iter().map(AmenityBadge::from_amenity).collect(),
            cleanliness: record.ratings.cleanliness.to_string(),
            safety: record.ratings.safety.to_string(),
            hours: record.opening_hours.clone(),
        }
    }
}

/// The list screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    /// Cards in server order
    pub cards: Vec<BathroomCard>,
    /// [`EMPTY_MESSAGE`] when there are no cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl ListView {
    /// Render records in the order received
    #[must_use]
    pub fn build(records: &[BathroomRecord], user: Option<&Coordinate>) -> Self {
        let cards: Vec<BathroomCard> = records
            .iter()
            .enumerate()
            .map(|(index, record)| BathroomCard::build(index, record, user))
            .collect();
        let empty_message = cards.is_empty().then_some(EMPTY_MESSAGE);
        Self {
            cards,
            empty_message,
        }
    }
}

// -----------------------------------------------------------------------------
// Map
// -----------------------------------------------------------------------------

/// Visible map region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    /// Center point
    pub center: Coordinate,
    /// Latitude span in degrees
    pub latitude_delta: f64,
    /// Longitude span in degrees
    pub longitude_delta: f64,
}

/// One restroom pin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Position in the ranked list
    pub index: usize,
    /// Pin position
    pub coordinate: Coordinate,
    /// Pin title
    pub title: String,
    /// Pin icon
    pub icon: &'static str,
}

/// The map screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Initial region
    pub region: MapRegion,
    /// User position, shown as the "you are here" dot
    pub user: Option<Coordinate>,
    /// One marker per record
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Render markers centered on the user, or on [`FALLBACK_CENTER`]
    #[must_use]
    pub fn build(records: &[BathroomRecord], user: Option<&Coordinate>) -> Self {
        Self {
            region: MapRegion {
                center: user.copied().unwrap_or(FALLBACK_CENTER),
                latitude_delta: MAP_DELTA,
                longitude_delta: MAP_DELTA,
            },
            user: user.copied(),
            markers: records
                .iter()
                .enumerate()
                .map(|(index, record)| MapMarker {
                    index,
                    coordinate: record.coordinate(),
                    title: record.name.clone(),
                    icon: "wc",
                })
                .collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// Detail
// -----------------------------------------------------------------------------

/// The detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    /// Restroom name
    pub title: String,
    /// Overall score, one decimal
    pub overall: String,
    /// `Cleanliness: x/5`
    pub cleanliness: String,
    /// `Safety: x/5`
    pub safety: String,
    /// `Hours: ...`
    pub hours: String,
    /// `Crowd Level: ...`
    pub crowd: String,
    /// Crowd badge color
    pub crowd_color: CrowdColor,
    /// Distance from the user, when known
    pub distance: Option<String>,
    /// Amenity tiles
    pub amenities: Vec<AmenityBadge>,
    /// Star picker state, filled up to the pending rating
    pub stars: [bool; 5],
    /// Directions link, when the user location is known
    pub directions_url: Option<String>,
}

impl DetailView {
    /// Render a record with the pending star selection (0 = none)
    #[must_use]
    pub fn build(record: &BathroomRecord, user: Option<&Coordinate>, pending_stars: u8) -> Self {
        let destination = record.coordinate();
        let mut stars = [false; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = i < usize::from(pending_stars);
        }

        Self {
            title: record.name.clone(),
            overall: format_tenths(record.ratings.overall),
            cleanliness: format!("Cleanliness: {}/5", record.ratings.cleanliness),
            safety: format!("Safety: {}/5", record.ratings.safety),
            hours: format!("Hours: {}", record.opening_hours),
            crowd: format!("Crowd Level: {}", record.crowd_updates.label()),
            crowd_color: crowd_color(&record.crowd_updates),
            distance: user.map(|u| distance_label(u, &destination)),
            amenities: record.amenities.iter().map(AmenityBadge::from_amenity).collect(),
            stars,
            directions_url: user.map(|u| directions_url(u, &destination)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restroom_api_client::models::Ratings;

    fn record(name: &str, location: (f64, f64), crowd: &str, amenities: &[&str]) -> BathroomRecord {
        BathroomRecord {
            id: None,
            name: name.to_string(),
            location,
            ratings: Ratings {
                overall: 4.16,
                cleanliness: 4.0,
                safety: 4.5,
            },
            crowd_updates: CrowdLevel::from(crowd.to_string()),
            amenities: amenities.iter().map(|a| Amenity::from((*a).to_string())).collect(),
            opening_hours: "06:00-22:00".to_string(),
        }
    }

    #[test]
    fn test_crowd_color_table() {
        assert_eq!(crowd_color(&CrowdLevel::Low).hex(), "#4CAF50");
        assert_eq!(crowd_color(&CrowdLevel::Medium).hex(), "#FF9800");
        assert_eq!(crowd_color(&CrowdLevel::High).hex(), "#F44336");
        assert_eq!(crowd_color(&CrowdLevel::Unknown("busy".into())).hex(), "#757575");
    }

    #[test]
    fn test_amenity_icon_table() {
        assert_eq!(amenity_icon(&Amenity::Wheelchair), "accessible");
        assert_eq!(amenity_icon(&Amenity::BabyChanging), "child-care");
        assert_eq!(amenity_icon(&Amenity::GenderNeutral), "wc");
        assert_eq!(amenity_icon(&Amenity::Other("shower".into())), "check");
    }

    #[test]
    fn test_amenity_label_replaces_first_underscore() {
        assert_eq!(amenity_label(&Amenity::BabyChanging), "baby changing");
        assert_eq!(amenity_label(&Amenity::Other("paper_towel_dispenser".into())), "paper towel_dispenser");
    }

    #[test]
    fn test_list_keeps_server_order_with_distances() {
        let user = Coordinate::new(0.0, 0.0);
        let half_km = (0.5 / restroom_geo::EARTH_RADIUS_KM).to_degrees();
        let records = vec![
            record("Far", (0.0, 1.0), "high", &[]),
            record("Near", (half_km, 0.0), "low", &["wheelchair"]),
        ];

        let view = ListView::build(&records, Some(&user));
        let names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Far", "Near"]);
        assert_eq!(view.cards[0].distance, "111.2km");
        assert_eq!(view.cards[1].distance, "500m");
        assert_eq!(view.cards[1].crowd_color, CrowdColor::Green);
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn test_overall_tie_rounds_up() {
        let mut averaged = record("Gym", (1.0, 1.0), "low", &[]);
        averaged.ratings.overall = 4.25;
        assert_eq!(BathroomCard::build(0, &averaged, None).overall, "4.3");
        assert_eq!(DetailView::build(&averaged, None, 0).overall, "4.3");
    }

    #[test]
    fn test_card_formatting() {
        let card = BathroomCard::build(0, &record("Park", (1.0, 1.0), "medium", &["baby_changing"]), None);
        assert_eq!(card.overall, "4.2");
        assert_eq!(card.distance, DISTANCE_PENDING);
        assert_eq!(card.cleanliness, "4");
        assert_eq!(card.safety, "4.5");
        assert_eq!(
            card.amenities,
            vec![AmenityBadge {
                icon: "child-care",
                label: "baby changing".into()
            }]
        );
    }

    #[test]
    fn test_empty_list_message() {
        let view = ListView::build(&[], None);
        assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
    }

    #[test]
    fn test_map_region_fallback() {
        let view = MapView::build(&[record("A", (1.0, 2.0), "low", &[])], None);
        assert_eq!(view.region.center, FALLBACK_CENTER);
        assert_eq!(view.markers[0].coordinate, Coordinate::new(1.0, 2.0));
        assert_eq!(view.markers[0].icon, "wc");
    }

    #[test]
    fn test_detail_view() {
        let user = Coordinate::new(33.6846, -117.8265);
        let view = DetailView::build(&record("Hall", (33.6405, -117.8443), "", &[]), Some(&user), 3);
        assert_eq!(view.cleanliness, "Cleanliness: 4/5");
        assert_eq!(view.crowd, "Crowd Level: unknown");
        assert_eq!(view.stars, [true, true, true, false, false]);
        assert_eq!(
            view.directions_url.as_deref(),
            Some("https://www.google.com/maps/dir/?api=1&origin=33.6846,-117.8265&destination=33.6405,-117.8443")
        );
    }
}
