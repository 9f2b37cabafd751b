//! Provider-side menu data: who sells what, when, and at what price.
//!
//! The scheduler core never reads this module. Collaborators use it to build
//! [`Order`](crate::model::Order)s out of [`FoodOption`]s and to decide
//! whether a provider should be offered at all. Operating hours take the
//! current time as an argument, so the caller, not this crate, decides what
//! "now" means; the scheduler itself never reads the clock.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::model::FoodOption;

/// Minutes since midnight, `0..=1439`.
pub type MinuteOfDay = u16;

/// Errors from parsing catalog data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The operating-hours string was not of the form `"HH:MM-HH:MM"`.
    #[error("invalid operating hours: {0}")]
    InvalidHours(String),
}

/// A daily opening window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    open: MinuteOfDay,
    close: MinuteOfDay,
}

impl OperatingHours {
    pub fn new(open: MinuteOfDay, close: MinuteOfDay) -> Self {
        Self { open, close }
    }

    /// Parses a window like `"07:00-11:00"`.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        let (open, close) = s
            .split_once('-')
            .ok_or_else(|| CatalogError::InvalidHours(s.to_string()))?;
        Ok(Self {
            open: parse_minute(open)?,
            close: parse_minute(close)?,
        })
    }

    /// Whether the provider is open at the given time of day.
    pub fn is_open_at(&self, now: MinuteOfDay) -> bool {
        self.open <= now && now <= self.close
    }
}

impl fmt::Display for OperatingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.open / 60,
            self.open % 60,
            self.close / 60,
            self.close % 60
        )
    }
}

fn parse_minute(s: &str) -> Result<MinuteOfDay, CatalogError> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| CatalogError::InvalidHours(s.to_string()))?;
    let hours: u16 = h
        .parse()
        .map_err(|_| CatalogError::InvalidHours(s.to_string()))?;
    let minutes: u16 = m
        .parse()
        .map_err(|_| CatalogError::InvalidHours(s.to_string()))?;
    if hours > 23 || minutes > 59 {
        return Err(CatalogError::InvalidHours(s.to_string()));
    }
    Ok(hours * 60 + minutes)
}

/// A food provider and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProvider {
    pub name: String,
    pub operating_hours: OperatingHours,
    pub options: Vec<FoodOption>,
}

impl FoodProvider {
    pub fn new(
        name: impl Into<String>,
        operating_hours: OperatingHours,
        options: Vec<FoodOption>,
    ) -> Self {
        Self {
            name: name.into(),
            operating_hours,
            options,
        }
    }
}

/// The built-in provider catalog.
pub fn default_catalog() -> Vec<FoodProvider> {
    vec![
        FoodProvider::new(
            "Starbucks (Breakfast)",
            OperatingHours::new(7 * 60, 11 * 60),
            vec![
                FoodOption::new("Caffè", 1.00, 5, Duration::from_secs(30)),
                FoodOption::new("Cornetto", 2.00, 2, Duration::from_secs(60)),
                FoodOption::new("Muffin", 2.50, 3, Duration::from_secs(120)),
                FoodOption::new("Frappe", 3.50, 4, Duration::from_secs(60)),
            ],
        ),
        FoodProvider::new(
            "McDonald's (Breakfast)",
            OperatingHours::new(7 * 60, 11 * 60),
            vec![
                FoodOption::new("Egg McMuffin", 3.99, 1, Duration::from_secs(60)),
                FoodOption::new("Hotcakes", 4.50, 2, Duration::from_secs(60)),
                FoodOption::new("Sausage McMuffin", 3.49, 3, Duration::from_secs(60)),
            ],
        ),
        FoodProvider::new(
            "Local Bakery (Lunch)",
            OperatingHours::new(12 * 60, 15 * 60),
            vec![
                FoodOption::new("Panino al Pollo", 5.00, 1, Duration::from_secs(60)),
                FoodOption::new("Insalata Cesar", 4.50, 2, Duration::from_secs(60)),
                FoodOption::new("Pizza Margherita", 6.99, 1, Duration::from_secs(60)),
            ],
        ),
        FoodProvider::new(
            "Pizza Hut (Dinner)",
            OperatingHours::new(18 * 60, 22 * 60),
            vec![
                FoodOption::new("Pizza Pepperoni", 10.99, 1, Duration::from_secs(120)),
                FoodOption::new("Pasta Alfredo", 8.50, 2, Duration::from_secs(60)),
                FoodOption::new("Insalata Caprese", 6.99, 3, Duration::from_secs(120)),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_window() {
        let hours = OperatingHours::parse("07:00-11:00").unwrap();
        assert_eq!(hours, OperatingHours::new(420, 660));
        assert_eq!(hours.to_string(), "07:00-11:00");
    }

    #[test]
    fn rejects_malformed_windows() {
        assert!(OperatingHours::parse("07:00").is_err());
        assert!(OperatingHours::parse("7am-11am").is_err());
        assert!(OperatingHours::parse("25:00-26:00").is_err());
        assert!(OperatingHours::parse("07:61-11:00").is_err());
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let hours = OperatingHours::parse("07:00-11:00").unwrap();
        assert!(hours.is_open_at(7 * 60));
        assert!(hours.is_open_at(9 * 60 + 30));
        assert!(hours.is_open_at(11 * 60));
        assert!(!hours.is_open_at(6 * 60 + 59));
        assert!(!hours.is_open_at(11 * 60 + 1));
    }

    #[test]
    fn default_catalog_has_the_four_providers() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].name, "Starbucks (Breakfast)");
        assert_eq!(catalog[0].options.len(), 4);
        assert!(catalog[3].operating_hours.is_open_at(19 * 60));
        assert!(!catalog[3].operating_hours.is_open_at(9 * 60));
    }
}
