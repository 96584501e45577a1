use lrm_core::{Record, RiskLevel};
use serde::Serialize;

/// Number of records per known risk category.
///
/// Unrecognised categories are not counted anywhere, so `total()` may be
/// smaller than the number of records it was built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

impl RiskCounts {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut counts = RiskCounts::default();
        for record in records {
            counts.add(&record.calculated_risk_level);
        }
        counts
    }

    pub fn add(&mut self, level: &RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::Low => self.low += 1,
            RiskLevel::Other(_) => {}
        }
    }

    pub fn get(&self, level: &RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::Low => self.low,
            RiskLevel::Other(_) => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.moderate + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_risk(risk: &str) -> Record {
        Record {
            region_name: "Ipoh".into(),
            timestamp: "2024-01-01".into(),
            rainfall_level: 0.0,
            soil_saturation: 0.0,
            slope_angle: 0.0,
            calculated_risk_level: RiskLevel::from(risk.to_string()),
            lat: None,
            lng: None,
        }
    }

    #[test]
    fn counts_known_categories() {
        let records: Vec<Record> = ["High", "Low", "High", "Moderate"].iter().map(|r| with_risk(r)).collect();
        let counts = RiskCounts::from_records(&records);
        assert_eq!(counts, RiskCounts { high: 2, moderate: 1, low: 1 });
        assert_eq!(counts.get(&RiskLevel::High), 2);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn unrecognised_categories_are_left_out() {
        let records: Vec<Record> = ["High", "Extreme", "", "Low"].iter().map(|r| with_risk(r)).collect();
        let counts = RiskCounts::from_records(&records);
        assert_eq!(counts.total(), 2);
        assert_eq!(records.len() - counts.total(), 2);
        assert_eq!(counts.get(&RiskLevel::Other("Extreme".into())), 0);
    }

    #[test]
    fn empty_input_counts_nothing() {
        assert_eq!(RiskCounts::from_records(&Vec::<Record>::new()), RiskCounts::default());
    }
}
