use crate::error::Result;
use crate::risk::RiskLevel;
use chrono::NaiveDateTime;
use lrm_utils::dates::parse_timestamp;
use serde::{Deserialize, Serialize};

/// One landslide-risk monitoring observation for a region at a point in time.
///
/// Field names follow the API's camelCase JSON. Records are never modified
/// after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub region_name: String,
    /// Date or datetime string as delivered, e.g. "2025-08-04".
    pub timestamp: String,
    /// Rainfall in mm
    pub rainfall_level: f64,
    /// Soil saturation in percent
    pub soil_saturation: f64,
    /// Slope angle in degrees
    pub slope_angle: f64,
    #[serde(default)]
    pub calculated_risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Record {
    /// Parsed timestamp, or `None` when the string is not a recognised date.
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp).ok()
    }

    /// (lat, lng) when both are present. Records without them get no map marker.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Decode an API response body (a JSON array of records).
    pub fn parse_records(body: &str) -> Result<Vec<Record>> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LrmError;

    const BODY: &str = r#"[
        {"regionName":"Cameron Highlands","rainfallLevel":182,"soilSaturation":91,"slopeAngle":44,"calculatedRiskLevel":"High","timestamp":"2025-08-04","lat":4.47,"lng":101.38},
        {"regionName":"Penang","rainfallLevel":12.5,"soilSaturation":40,"slopeAngle":15,"calculatedRiskLevel":"Low","timestamp":"2025-08-03T09:00:00"},
        {"regionName":"Ipoh","rainfallLevel":80,"soilSaturation":70,"slopeAngle":30,"calculatedRiskLevel":"Unrated","timestamp":"not a date","lat":4.6}
    ]"#;

    #[test]
    fn parse_records_reads_api_payload() {
        let records = Record::parse_records(BODY).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].region_name, "Cameron Highlands");
        assert_eq!(records[0].rainfall_level, 182.0);
        assert_eq!(records[0].calculated_risk_level, RiskLevel::High);
        assert_eq!(records[0].coordinates(), Some((4.47, 101.38)));
        assert_eq!(records[1].soil_saturation, 40.0);
        assert_eq!(records[2].calculated_risk_level, RiskLevel::Other("Unrated".into()));
    }

    #[test]
    fn coordinates_need_both_halves() {
        let records = Record::parse_records(BODY).unwrap();
        assert_eq!(records[1].coordinates(), None);
        assert_eq!(records[2].coordinates(), None);
    }

    #[test]
    fn parsed_timestamp_is_optional() {
        let records = Record::parse_records(BODY).unwrap();
        assert!(records[0].parsed_timestamp().is_some());
        assert!(records[1].parsed_timestamp().is_some());
        assert!(records[2].parsed_timestamp().is_none());
    }

    #[test]
    fn missing_risk_level_defaults_to_unrecognised() {
        let body = r#"[{"regionName":"Langkawi","rainfallLevel":1,"soilSaturation":2,"slopeAngle":3,"timestamp":"2025-01-01"}]"#;
        let records = Record::parse_records(body).unwrap();
        assert_eq!(records[0].calculated_risk_level, RiskLevel::Other(String::new()));
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let err = Record::parse_records(r#"{"error":"down"}"#).unwrap_err();
        assert!(matches!(err, LrmError::Decode(_)));
        assert!(Record::parse_records("").is_err());
    }

    #[test]
    fn serializing_omits_absent_coordinates() {
        let records = Record::parse_records(BODY).unwrap();
        let json = serde_json::to_string(&records[1]).unwrap();
        assert!(json.contains("\"regionName\":\"Penang\""));
        assert!(!json.contains("\"lat\""));
    }
}
