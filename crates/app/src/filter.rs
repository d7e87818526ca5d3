//! Amenity preferences and urgency
//!
//! [`FilterState`] is what the next ranking request uses. The filter dialog
//! edits a [`FilterSelection`] copy and only the "Apply" action commits it.

use restroom_api_client::models::{Amenity, Urgency};
use restroom_core::config::DefaultsConfig;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::warn;

fn toggle_in(set: &mut BTreeSet<Amenity>, amenity: Amenity) {
    if !set.remove(&amenity) {
        set.insert(amenity);
    }
}

/// Committed filter state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    preferences: BTreeSet<Amenity>,
    urgency: Urgency,
}

impl FilterState {
    /// Filters with the given preferences and urgency
    pub fn new(preferences: impl IntoIterator<Item = Amenity>, urgency: Urgency) -> Self {
        Self {
            preferences: preferences.into_iter().collect(),
            urgency,
        }
    }

    /// Filters seeded from the `[defaults]` config table.
    ///
    /// An unrecognized urgency falls back to `normal` with a warning.
    #[must_use]
    pub fn from_config(defaults: &DefaultsConfig) -> Self {
        let urgency = defaults.urgency.parse().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring configured urgency");
            Urgency::default()
        });
        let preferences = defaults
            .preferences
            .iter()
            .map(|tag| Amenity::from(tag.clone()));
        Self::new(preferences, urgency)
    }

    /// Current preferences
    #[must_use]
    pub fn preferences(&self) -> &BTreeSet<Amenity> {
        &self.preferences
    }

    /// Current urgency
    #[must_use]
    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle(&mut self, amenity: Amenity) {
        toggle_in(&mut self.preferences, amenity);
    }

    /// Replace preferences and urgency with the dialog's selection.
    ///
    /// Returns true when anything changed.
    pub fn apply(&mut self, selection: FilterSelection) -> bool {
        let changed = self.preferences != selection.preferences || self.urgency != selection.urgency;
        self.preferences = selection.preferences;
        self.urgency = selection.urgency;
        changed
    }

    /// Header banner text, shown only while at least one preference is active
    #[must_use]
    pub fn active_summary(&self) -> Option<FilterBanner> {
        if self.preferences.is_empty() {
            return None;
        }

        let tags: Vec<&str> = self.preferences.iter().map(Amenity::as_str).collect();
        Some(FilterBanner {
            filters: format!("Active filters: {}", tags.join(", ")),
            urgency: (self.urgency != Urgency::Normal)
                .then(|| format!("Urgency: {}", self.urgency)),
        })
    }
}

/// Active filter banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBanner {
    /// `Active filters: a, b`
    pub filters: String,
    /// `Urgency: high`, only when urgency is not `normal`
    pub urgency: Option<String>,
}

/// Uncommitted dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    preferences: BTreeSet<Amenity>,
    urgency: Urgency,
}

impl FilterSelection {
    /// Open the dialog on the committed state
    #[must_use]
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            preferences: state.preferences.clone(),
            urgency: state.urgency,
        }
    }

    /// Flip one amenity switch
    pub fn toggle(&mut self, amenity: Amenity) {
        toggle_in(&mut self.preferences, amenity);
    }

    /// Pick an urgency level
    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.urgency = urgency;
    }

    /// Whether the switch for `amenity` is on
    #[must_use]
    pub fn is_selected(&self, amenity: &Amenity) -> bool {
        self.preferences.contains(amenity)
    }

    /// Selected urgency
    #[must_use]
    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}
