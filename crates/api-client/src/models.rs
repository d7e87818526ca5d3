//! Wire models shared with the ranking backend
//!
//! Tag-like enums (`Amenity`, `CrowdLevel`) keep unrecognized values instead
//! of failing to deserialize, so a newer backend never breaks an older client.

use chrono::{Local, NaiveTime};
use restroom_geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Amenity
// -----------------------------------------------------------------------------

/// Accessibility/feature tag attached to a restroom
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Amenity {
    /// `wheelchair`
    Wheelchair,
    /// `baby_changing`
    BabyChanging,
    /// `gender_neutral`
    GenderNeutral,
    /// Any tag this client does not know about
    Other(String),
}

impl Amenity {
    /// The three tags the filter dialog offers
    pub const KNOWN: [Amenity; 3] = [Self::Wheelchair, Self::BabyChanging, Self::GenderNeutral];

    /// Wire tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wheelchair => "wheelchair",
            Self::BabyChanging => "baby_changing",
            Self::GenderNeutral => "gender_neutral",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for Amenity {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "wheelchair" => Self::Wheelchair,
            "baby_changing" => Self::BabyChanging,
            "gender_neutral" => Self::GenderNeutral,
            _ => Self::Other(tag),
        }
    }
}

impl From<Amenity> for String {
    fn from(amenity: Amenity) -> Self {
        match amenity {
            Amenity::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Amenity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim().to_string()))
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Urgency
// -----------------------------------------------------------------------------

/// How urgently the user needs a restroom; weighted server-side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// `low`
    Low,
    /// `normal`
    #[default]
    Normal,
    /// `high`
    High,
}

/// Urgency text outside `low`/`normal`/`high`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency '{0}' (expected low, normal or high)")]
pub struct UnknownUrgency(pub String);

impl Urgency {
    /// All levels in dialog order
    pub const ALL: [Urgency; 3] = [Self::Low, Self::Normal, Self::High];

    /// Wire value
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl FromStr for Urgency {
    type Err = UnknownUrgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(UnknownUrgency(s.to_string())),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// CrowdLevel
// -----------------------------------------------------------------------------

/// Server-reported occupancy estimate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CrowdLevel {
    /// `low`
    Low,
    /// `medium`
    Medium,
    /// `high`
    High,
    /// Missing or unrecognized; keeps the raw label
    Unknown(String),
}

impl Default for CrowdLevel {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl CrowdLevel {
    /// Display label; an empty unknown value reads as `unknown`
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown(raw) if raw.is_empty() => "unknown",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for CrowdLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<CrowdLevel> for String {
    fn from(level: CrowdLevel) -> Self {
        match level {
            CrowdLevel::Unknown(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// -----------------------------------------------------------------------------
// BathroomRecord
// -----------------------------------------------------------------------------

/// Aggregated scores, computed server-side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ratings {
    /// Overall score
    pub overall: f64,
    /// Cleanliness score
    pub cleanliness: f64,
    /// Safety score
    pub safety: f64,
}

/// One ranked restroom as returned by `/top-bathrooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BathroomRecord {
    /// Backend identifier, when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// `[latitude, longitude]`
    pub location: (f64, f64),
    /// Aggregated scores
    #[serde(default)]
    pub ratings: Ratings,
    /// Occupancy estimate
    #[serde(default)]
    pub crowd_updates: CrowdLevel,
    /// Amenity tags
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    /// Free-form hours string, e.g. `06:00-22:00`
    #[serde(default)]
    pub opening_hours: String,
}

impl BathroomRecord {
    /// Location as a coordinate
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::from(self.location)
    }

    /// Identifier used for rating and visit submissions (`id`, else `name`)
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

// -----------------------------------------------------------------------------
// UserContext
// -----------------------------------------------------------------------------

/// Per-request payload for `/top-bathrooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// Preferred amenity tags
    pub preferences: BTreeSet<Amenity>,
    /// Local time of day, `HH:MM`
    pub time: String,
    /// `[latitude, longitude]`
    pub location: (f64, f64),
    /// Declared urgency
    pub urgency: Urgency,
}

impl UserContext {
    /// Builds a context stamped with the given time of day.
    #[must_use]
    pub fn new(
        preferences: BTreeSet<Amenity>,
        location: Coordinate,
        urgency: Urgency,
        time: NaiveTime,
    ) -> Self {
        Self {
            preferences,
            time: time.format("%H:%M").to_string(),
            location: location.as_pair(),
            urgency,
        }
    }

    /// Builds a context stamped with the current local time.
    #[must_use]
    pub fn now(preferences: BTreeSet<Amenity>, location: Coordinate, urgency: Urgency) -> Self {
        Self::new(preferences, location, urgency, Local::now().time())
    }
}

// -----------------------------------------------------------------------------
// Ratings submission
// -----------------------------------------------------------------------------

/// A star rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

/// Star value outside `1..=5`; zero means nothing was selected
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct InvalidRating(pub u8);

impl Rating {
    /// Validates a star value.
    pub fn new(stars: u8) -> Result<Self, InvalidRating> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(InvalidRating(stars))
        }
    }

    /// Number of stars
    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

/// Body of `/rate-bathroom`
#[derive(Debug, Clone, Serialize)]
pub struct RatingSubmission<'a> {
    /// Restroom identifier
    #[serde(rename = "bathroomId")]
    pub bathroom_id: &'a str,
    /// Star rating
    pub rating: Rating,
}

/// Backend acknowledgment; its shape is backend-defined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingAck(pub serde_json::Value);

/// Body of `/record-visit`
#[derive(Debug, Clone, Serialize)]
pub struct VisitRequest<'a> {
    /// Restroom identifier
    pub bathroom_id: &'a str,
}

/// Response of `/record-visit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitResponse {
    /// `ok` on success
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "name": "Aldrich Park Restroom",
            "location": [33.6459, -117.8427],
            "ratings": {"overall": 4.25, "cleanliness": 4, "safety": 5},
            "crowd_updates": "low",
            "amenities": ["wheelchair", "changing_table"],
            "opening_hours": "06:00-22:00"
        })
    }

    #[test]
    fn test_bathroom_record_deserialize() {
        let record: BathroomRecord = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(record.name, "Aldrich Park Restroom");
        assert_eq!(record.coordinate(), Coordinate::new(33.6459, -117.8427));
        assert_eq!(record.ratings.cleanliness, 4.0);
        assert_eq!(record.crowd_updates, CrowdLevel::Low);
        assert_eq!(
            record.amenities,
            vec![Amenity::Wheelchair, Amenity::Other("changing_table".into())]
        );
        assert_eq!(record.identifier(), "Aldrich Park Restroom");
    }

    #[test]
    fn test_bathroom_record_minimal_fields() {
        let record: BathroomRecord =
            serde_json::from_value(json!({"name": "Kiosk", "location": [0.0, 0.0]})).unwrap();
        assert_eq!(record.crowd_updates.label(), "unknown");
        assert!(record.amenities.is_empty());
        assert_eq!(record.ratings, Ratings::default());
    }

    #[test]
    fn test_identifier_prefers_id() {
        let mut value = sample_json();
        value["id"] = json!("br-17");
        let record: BathroomRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.identifier(), "br-17");
    }

    #[test]
    fn test_unknown_crowd_level_keeps_label() {
        let level: CrowdLevel = serde_json::from_value(json!("packed")).unwrap();
        assert_eq!(level, CrowdLevel::Unknown("packed".into()));
        assert_eq!(level.label(), "packed");
        assert_eq!(serde_json::to_value(&level).unwrap(), json!("packed"));
    }

    #[test]
    fn test_user_context_wire_format() {
        let preferences: BTreeSet<Amenity> =
            [Amenity::BabyChanging, Amenity::Wheelchair].into_iter().collect();
        let context = UserContext::new(
            preferences,
            Coordinate::new(33.6846, -117.8265),
            Urgency::High,
            NaiveTime::from_hms_opt(9, 5, 59).unwrap(),
        );

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["time"], json!("09:05"));
        assert_eq!(value["location"], json!([33.6846, -117.8265]));
        assert_eq!(value["urgency"], json!("high"));
        assert_eq!(value["preferences"], json!(["wheelchair", "baby_changing"]));
    }

    #[test]
    fn test_urgency_parsing() {
        assert_eq!("HIGH".parse::<Urgency>().unwrap(), Urgency::High);
        assert_eq!(Urgency::default(), Urgency::Normal);
        assert!("extreme".parse::<Urgency>().is_err());
        assert!(serde_json::from_value::<Urgency>(json!("extreme")).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().stars(), 5);
    }

    #[test]
    fn test_rating_submission_wire_format() {
        let body = RatingSubmission {
            bathroom_id: "br-17",
            rating: Rating::new(4).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"bathroomId": "br-17", "rating": 4})
        );
    }
}
