//! Text renderers for the screen view models
//!
//! Each function returns a `String` so the binary decides where it goes.
//! Positions are shown 1-based.

use owo_colors::OwoColorize;
use restroom_app::filter::FilterBanner;
use restroom_app::view::{
    AmenityBadge, BathroomCard, CrowdColor, DetailView, ListView, MapView, APP_TITLE,
};
use std::fmt::Write;

/// Terminal glyph for an amenity icon name
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "accessible" => "♿",
        "child-care" => "👶",
        "wc" => "🚻",
        _ => "✓",
    }
}

/// Five-star picker, filled stars first
pub fn star_bar(stars: &[bool; 5]) -> String {
    stars.iter().map(|&on| if on { '★' } else { '☆' }).collect()
}

/// Renders view models, with or without ANSI colors
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colors follow the terminal (`CLICOLOR`, `NO_COLOR`, tty detection)
    pub fn detect() -> Self {
        Self {
            color: console::colors_enabled(),
        }
    }

    /// No escape codes
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn crowd(&self, text: &str, color: CrowdColor) -> String {
        if !self.color {
            return text.to_string();
        }
        match color {
            CrowdColor::Green => text.green().to_string(),
            CrowdColor::Orange => text.truecolor(0xFF, 0x98, 0x00).to_string(),
            CrowdColor::Red => text.red().to_string(),
            CrowdColor::Gray => text.bright_black().to_string(),
        }
    }

    fn strong(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn badges(&self, amenities: &[AmenityBadge]) -> String {
        amenities
            .iter()
            .map(|b| format!("{} {}", icon_glyph(b.icon), b.label))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// App title with the active filter banner under it
    pub fn header(&self, banner: Option<&FilterBanner>) -> String {
        let mut out = self.strong(APP_TITLE);
        if let Some(banner) = banner {
            let _ = write!(out, "\n{}", self.banner(banner));
        }
        out
    }

    /// `Active filters: ...` line, plus urgency when not normal
    pub fn banner(&self, banner: &FilterBanner) -> String {
        match &banner.urgency {
            Some(urgency) => self.dim(&format!("{} · {}", banner.filters, urgency)),
            None => self.dim(&banner.filters),
        }
    }

    /// One list card
    pub fn card(&self, card: &BathroomCard) -> String {
        let mut out = format!(
            "{}. {}  ★ {}\n   {} · Crowd: {}\n   Cleanliness: {}/5 · Safety: {}/5 · Hours: {}",
            card.index + 1,
            self.strong(&card.name),
            card.overall,
            card.distance,
            self.crowd(&card.crowd, card.crowd_color),
            card.cleanliness,
            card.safety,
            card.hours,
        );
        if !card.amenities.is_empty() {
            let _ = write!(out, "\n   {}", self.badges(&card.amenities));
        }
        out
    }

    /// The list screen, cards separated by blank lines
    pub fn list(&self, view: &ListView) -> String {
        if let Some(message) = view.empty_message {
            return self.dim(message);
        }
        view.cards
            .iter()
            .map(|card| self.card(card))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The map screen as a region line followed by one pin per line
    pub fn map(&self, view: &MapView) -> String {
        let region = &view.region;
        let mut out = format!(
            "Map centered on {:.4},{:.4} (span {}°)",
            region.center.latitude, region.center.longitude, region.latitude_delta
        );
        match &view.user {
            Some(user) => {
                let _ = write!(out, "\n  ● You are here  {:.4},{:.4}", user.latitude, user.longitude);
            }
            None => {
                let _ = write!(out, "\n  {}", self.dim("Location unknown"));
            }
        }
        for marker in &view.markers {
            let _ = write!(
                out,
                "\n  {} {}. {}  {:.4},{:.4}",
                icon_glyph(marker.icon),
                marker.index + 1,
                marker.title,
                marker.coordinate.latitude,
                marker.coordinate.longitude
            );
        }
        out
    }

    /// The detail screen
    pub fn detail(&self, view: &DetailView) -> String {
        let mut out = format!("{}  ★ {}", self.strong(&view.title), view.overall);
        if let Some(distance) = &view.distance {
            let _ = write!(out, " · {distance}");
        }
        let _ = write!(
            out,
            "\n{}\n{}\n{}\n{}",
            view.cleanliness,
            view.safety,
            view.hours,
            self.crowd(&view.crowd, view.crowd_color)
        );
        if !view.amenities.is_empty() {
            let _ = write!(out, "\nAmenities: {}", self.badges(&view.amenities));
        }
        let _ = write!(out, "\nYour rating: {}", star_bar(&view.stars));
        if let Some(url) = &view.directions_url {
            let _ = write!(out, "\nDirections: {url}");
        }
        out
    }
}
