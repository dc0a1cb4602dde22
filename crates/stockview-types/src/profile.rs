//! Company profile record.

use serde::{Deserialize, Deserializer, Serialize};

/// Market capitalization as reported by the profile service.
///
/// The service reports either a raw number or a preformatted string
/// (e.g. "2.8T"), so both are accepted. `null` means the service does not
/// know the figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarketCap {
    /// Numeric capitalization in currency units.
    Amount(f64),
    /// Preformatted capitalization text.
    Text(String),
    /// Not reported.
    #[default]
    Unknown,
}

impl std::fmt::Display for MarketCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(v) if v.abs() >= 1e12 => write!(f, "{:.2}T", v / 1e12),
            Self::Amount(v) if v.abs() >= 1e9 => write!(f, "{:.2}B", v / 1e9),
            Self::Amount(v) if v.abs() >= 1e6 => write!(f, "{:.2}M", v / 1e6),
            Self::Amount(v) => write!(f, "{v:.0}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Unknown => write!(f, "N/A"),
        }
    }
}

/// Descriptive record of the company behind a ticker.
///
/// Missing or `null` text fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Company name.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Sector (e.g. "Technology").
    #[serde(deserialize_with = "null_as_empty")]
    pub sector: String,
    /// Industry within the sector.
    #[serde(deserialize_with = "null_as_empty")]
    pub industry: String,
    /// Market capitalization.
    pub market_cap: MarketCap,
    /// Free-form business description.
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_names() {
        let json = r#"{
            "name": "Apple Inc.",
            "sector": "Technology",
            "industry": "Consumer Electronics",
            "marketCap": 2870000000000,
            "description": "Designs phones."
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Apple Inc.");
        assert_eq!(profile.market_cap.to_string(), "2.87T");
    }

    #[test]
    fn test_profile_missing_fields_default() {
        let profile: Profile = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(profile.name, "Acme");
        assert!(profile.sector.is_empty());
        assert_eq!(profile.market_cap, MarketCap::default());
    }

    #[test]
    fn test_profile_null_fields_read_as_empty() {
        let json = r#"{
            "name": "Apple Inc.",
            "sector": null,
            "industry": null,
            "marketCap": null,
            "description": null
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Apple Inc.");
        assert!(profile.sector.is_empty());
        assert!(profile.description.is_empty());
        assert_eq!(profile.market_cap, MarketCap::Unknown);
        assert_eq!(profile.market_cap.to_string(), "N/A");
    }

    #[test]
    fn test_profile_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Profile>(r#"{"name": 7}"#).is_err());
    }

    #[test]
    fn test_market_cap_text() {
        let cap: MarketCap = serde_json::from_str("\"1.2B\"").unwrap();
        assert_eq!(cap.to_string(), "1.2B");
    }

    #[test]
    fn test_market_cap_scales() {
        assert_eq!(MarketCap::Amount(3_500_000_000.0).to_string(), "3.50B");
        assert_eq!(MarketCap::Amount(42_000_000.0).to_string(), "42.00M");
        assert_eq!(MarketCap::Amount(950.0).to_string(), "950");
    }
}
