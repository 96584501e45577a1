use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker colour for records whose risk level is not one of the three known categories.
pub const DEFAULT_RISK_COLOR: &str = "#6b7280";

/// Risk classification computed upstream and consumed as-is.
///
/// Anything other than `Low`, `Moderate` or `High` is kept verbatim in
/// `Other` so it still renders; it just does not count towards any of the
/// per-category totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Other(String),
}

impl RiskLevel {
    /// The three categories that are counted and offered as filter options,
    /// in display order.
    pub const KNOWN: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Other(s) => s.as_str(),
        }
    }

    /// Hex colour used for card stripes, badges and map markers.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#F50000",
            RiskLevel::Moderate => "#F7B500",
            RiskLevel::Low => "#008000",
            RiskLevel::Other(_) => DEFAULT_RISK_COLOR,
        }
    }

    /// Radius in metres of the circle drawn around the selected record's marker.
    pub fn highlight_radius_m(&self) -> f64 {
        match self {
            RiskLevel::High => 3000.0,
            RiskLevel::Moderate => 2400.0,
            RiskLevel::Low => 1600.0,
            RiskLevel::Other(_) => 200.0,
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Other(String::new())
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => RiskLevel::Low,
            "Moderate" => RiskLevel::Moderate,
            "High" => RiskLevel::High,
            _ => RiskLevel::Other(value),
        }
    }
}

impl From<RiskLevel> for String {
    fn from(value: RiskLevel) -> Self {
        match value {
            RiskLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RiskLevel::from(s.to_string()))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_round_trip_through_strings() {
        for level in RiskLevel::KNOWN {
            let s: String = level.clone().into();
            assert_eq!(RiskLevel::from(s), level);
        }
    }

    #[test]
    fn unknown_level_is_kept_verbatim() {
        let level: RiskLevel = "Severe".parse().unwrap();
        assert_eq!(level, RiskLevel::Other("Severe".to_string()));
        assert_eq!(level.to_string(), "Severe");
        assert!(!RiskLevel::KNOWN.contains(&level));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(RiskLevel::from("high".to_string()), RiskLevel::Other("high".to_string()));
    }

    #[test]
    fn palette_and_radius() {
        assert_eq!(RiskLevel::High.color(), "#F50000");
        assert_eq!(RiskLevel::Moderate.color(), "#F7B500");
        assert_eq!(RiskLevel::Low.color(), "#008000");
        assert_eq!(RiskLevel::default().color(), DEFAULT_RISK_COLOR);
        assert_eq!(RiskLevel::High.highlight_radius_m(), 3000.0);
        assert_eq!(RiskLevel::Moderate.highlight_radius_m(), 2400.0);
        assert_eq!(RiskLevel::Low.highlight_radius_m(), 1600.0);
        assert_eq!(RiskLevel::Other("x".into()).highlight_radius_m(), 200.0);
    }

    #[test]
    fn deserializes_from_json_string() {
        let level: RiskLevel = serde_json::from_str("\"Moderate\"").unwrap();
        assert_eq!(level, RiskLevel::Moderate);
        let json = serde_json::to_string(&RiskLevel::Other("Unknown".into())).unwrap();
        assert_eq!(json, "\"Unknown\"");
    }
}
