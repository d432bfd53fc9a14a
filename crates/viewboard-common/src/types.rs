//! Record and dimension types shared across the Viewboard workspace

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Unique identifier for a viewer session
pub type SessionId = Uuid;

/// Timestamp type used throughout the application
pub type Timestamp = DateTime<Utc>;

/// Canonical display order for age brackets
pub const AGE_BRACKETS: [&str; 6] = ["18-25", "26-35", "36-45", "46-55", "56-65", "66-70"];

/// Fixed gender axis used by demographic breakdowns
pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// Sentinel country value meaning "no restriction"
pub const ALL_COUNTRIES: &str = "All Countries";

/// Sentinel continent value meaning "no restriction"
pub const ALL_CONTINENTS: &str = "All Continents";

/// One viewership observation from the provider dataset
///
/// Field names follow the provider's JSON schema verbatim, including the
/// two multi-word keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Referrer")]
    pub referrer: String,
    #[serde(rename = "User Agents")]
    pub device: String,
    #[serde(rename = "Peak Usage Hours")]
    pub peak_hour: String,
    #[serde(rename = "Viewership")]
    pub viewership: u64,
}

/// Categorical dimensions a record can be sliced or grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Country,
    Continent,
    Sport,
    Age,
    Gender,
    Referrer,
    Device,
    PeakHour,
}

impl Dimension {
    /// All dimensions, in the order option lists are presented
    pub const ALL: [Dimension; 8] = [
        Dimension::Country,
        Dimension::Continent,
        Dimension::Sport,
        Dimension::Age,
        Dimension::Gender,
        Dimension::Referrer,
        Dimension::Device,
        Dimension::PeakHour,
    ];

    /// Display name matching the provider's field naming
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Country => "Country",
            Dimension::Continent => "Continent",
            Dimension::Sport => "Sport",
            Dimension::Age => "Age",
            Dimension::Gender => "Gender",
            Dimension::Referrer => "Referrer",
            Dimension::Device => "User Agents",
            Dimension::PeakHour => "Peak Usage Hours",
        }
    }

    /// Fixed canonical label order, if the dimension has one
    pub fn canonical_order(&self) -> Option<&'static [&'static str]> {
        match self {
            Dimension::Age => Some(&AGE_BRACKETS),
            Dimension::Gender => Some(&GENDERS),
            _ => None,
        }
    }

    /// Sentinel label meaning "no restriction", if the dimension has one
    pub fn all_sentinel(&self) -> Option<&'static str> {
        match self {
            Dimension::Country => Some(ALL_COUNTRIES),
            Dimension::Continent => Some(ALL_CONTINENTS),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ViewRecord {
    /// Project the categorical value for a dimension
    pub fn field(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Country => &self.country,
            Dimension::Continent => &self.continent,
            Dimension::Sport => &self.sport,
            Dimension::Age => &self.age,
            Dimension::Gender => &self.gender,
            Dimension::Referrer => &self.referrer,
            Dimension::Device => &self.device,
            Dimension::PeakHour => &self.peak_hour,
        }
    }
}
