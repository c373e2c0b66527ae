use serde::{Deserialize, Serialize};
use statlab_stats::descriptive::DescriptiveSummary;

/// Serializable form of a descriptive summary.
///
/// The layout mirrors the calculator display: rounded display measures, the
/// mode rendered as text, and unrounded extremes and data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SummaryRecord {
    pub n: usize,
    /// The sample, sorted ascending.
    pub data: Vec<f64>,
    pub mean: f64,
    pub median: f64,
    pub mode: String,
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&DescriptiveSummary> for SummaryRecord {
    fn from(summary: &DescriptiveSummary) -> Self {
        Self {
            n: summary.count,
            data: summary.sorted_values.clone(),
            mean: summary.mean,
            median: summary.median,
            mode: summary.mode.to_string(),
            range: summary.range,
            variance: summary.variance,
            std_dev: summary.std_dev,
            q1: summary.q1,
            q3: summary.q3,
            iqr: summary.iqr,
            min: summary.min,
            max: summary.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_summary() {
        let summary = DescriptiveSummary::parse("2, 3, 3, 5").unwrap();
        let record = SummaryRecord::from(&summary);
        assert_eq!(record.n, 4);
        assert_eq!(record.data, vec![2.0, 3.0, 3.0, 5.0]);
        assert_eq!(record.mean, 3.25);
        assert_eq!(record.mode, "3");
        assert_eq!(record.min, 2.0);
        assert_eq!(record.max, 5.0);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let summary = DescriptiveSummary::parse("12, 15, 18, 20").unwrap();
        let record = SummaryRecord::from(&summary);
        let json = serde_json::to_string(&record).unwrap();
        let back: SummaryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
