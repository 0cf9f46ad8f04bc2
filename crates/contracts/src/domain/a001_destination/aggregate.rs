use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::countries::is_national;
use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier assigned by the destination store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub String);

impl DestinationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for DestinationId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(DestinationId)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Travel destination referenced by packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub country: String,

    /// Number of packages that reference this destination.
    /// Maintained by package management, read-only here.
    #[serde(default)]
    pub packages: u32,

    #[serde(
        default,
        deserialize_with = "timestamp_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "timestamp_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parse a backend timestamp. RFC 3339 with an offset, or a naive
/// `2025-08-25T20:38:49.123456` which the backend writes in UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.and_utc()))
}

fn timestamp_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

impl Destination {
    pub fn new(id: DestinationId, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            packages: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_packages(mut self, packages: u32) -> Self {
        self.packages = packages;
        self
    }

    pub fn destination_type(&self) -> DestinationType {
        DestinationType::of_country(&self.country)
    }

    /// Same `(name, country)` key, name compared case-insensitively
    pub fn same_key(&self, name: &str, country: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase() && self.country == country
    }

    /// Form values for editing this record
    pub fn to_dto(&self) -> DestinationDto {
        DestinationDto {
            name: self.name.clone(),
            country: self.country.clone(),
        }
    }

    /// Apply edited form values, id and usage counter are kept
    pub fn apply(&mut self, dto: &DestinationDto) {
        self.name = dto.name.clone();
        self.country = dto.country.clone();
    }
}

impl AggregateRoot for Destination {
    type Id = DestinationId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "destinations"
    }

    fn element_name() -> &'static str {
        "Destination"
    }

    fn list_name() -> &'static str {
        "Destinations"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DestinationDto {
    pub name: String,
    pub country: String,
}

impl DestinationDto {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    National,
    International,
}

impl DestinationType {
    pub fn of_country(country: &str) -> Self {
        if is_national(country) {
            Self::National
        } else {
            Self::International
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::National => "National",
            Self::International => "International",
        }
    }
}

/// Type filter of the destinations list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationTypeFilter {
    #[default]
    All,
    National,
    International,
}

impl DestinationTypeFilter {
    pub const ALL: [DestinationTypeFilter; 3] = [Self::All, Self::National, Self::International];

    pub fn matches(&self, destination: &Destination) -> bool {
        match self {
            Self::All => true,
            Self::National => destination.destination_type() == DestinationType::National,
            Self::International => {
                destination.destination_type() == DestinationType::International
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::National => "national",
            Self::International => "international",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Destinations",
            Self::National => "National",
            Self::International => "International",
        }
    }
}

impl FromStr for DestinationTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "national" => Ok(Self::National),
            "international" => Ok(Self::International),
            other => Err(format!("Unknown destination filter: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": "7",
            "name": "Mumbai",
            "country": "India",
            "packages": 5,
            "created_at": "2025-08-25T20:38:49Z",
            "updated_at": "2025-08-25T20:38:49Z"
        }"#;
        let d: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, DestinationId::new("7"));
        assert_eq!(d.packages, 5);
        assert_eq!(d.destination_type(), DestinationType::National);
        assert!(d.created_at.is_some());
    }

    #[test]
    fn reads_naive_backend_timestamps() {
        let json = r#"[{
            "id": "1",
            "name": "Bali",
            "country": "Indonesia",
            "packages": 8,
            "created_at": "2025-08-25T20:38:49.123456",
            "updated_at": "2025-08-25T20:38:49.123456"
        }]"#;
        let list: Vec<Destination> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].packages, 8);
        let created = list[0].created_at.unwrap();
        assert_eq!(created, parse_timestamp("2025-08-25T20:38:49.123456Z").unwrap());
        assert_eq!(created.timestamp_subsec_micros(), 123456);
    }

    #[test]
    fn null_or_missing_timestamps_are_none() {
        let d: Destination = serde_json::from_str(
            r#"{"id":"2","name":"Goa","country":"India","created_at":null}"#,
        )
        .unwrap();
        assert!(d.created_at.is_none());
        assert!(d.updated_at.is_none());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn missing_counter_defaults_to_zero() {
        let d: Destination =
            serde_json::from_str(r#"{"id":"x","name":"Bali","country":"Indonesia"}"#).unwrap();
        assert_eq!(d.packages, 0);
        assert_eq!(d.destination_type(), DestinationType::International);
    }

    #[test]
    fn same_key_ignores_name_case_but_not_country_case() {
        let d = Destination::new(DestinationId::new("1"), "Bali", "Indonesia");
        assert!(d.same_key("bali", "Indonesia"));
        assert!(d.same_key("  BALI ", "Indonesia"));
        assert!(!d.same_key("bali", "indonesia"));
        assert!(!d.same_key("Bali", "India"));
    }

    #[test]
    fn filter_parses_from_select_values() {
        for f in DestinationTypeFilter::ALL {
            assert_eq!(f.as_str().parse::<DestinationTypeFilter>().unwrap(), f);
        }
        assert!("domestic".parse::<DestinationTypeFilter>().is_err());
    }

    #[test]
    fn full_name_combines_index_and_collection() {
        assert_eq!(Destination::full_name(), "a001_destinations");
    }
}
