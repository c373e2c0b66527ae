use crate::{mode::Mode, quartiles::Quartiles, sample::Sample};

/// Descriptive statistics summarizing a sample.
///
/// This structure holds the full battery the calculator displays: measures of
/// central tendency, dispersion, and the five-number summary. The
/// display-oriented measures are rounded to two decimal places;
/// [`min`](Self::min), [`max`](Self::max) and
/// [`sorted_values`](Self::sorted_values) are reported unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveSummary {
    /// Ascending copy of the sample.
    pub sorted_values: Vec<f64>,
    /// Number of values in the sample.
    pub count: usize,
    /// Arithmetic mean, rounded to two decimals.
    pub mean: f64,
    /// Median: midpoint of the two central elements for an even count, the
    /// central element otherwise. Rounded to two decimals.
    pub median: f64,
    /// Most frequent value(s), or no mode when every value is unique.
    pub mode: Mode,
    /// `max - min`, rounded to two decimals.
    pub range: f64,
    /// Population variance: the sum of squared deviations divided by `n`
    /// (not `n - 1`). Rounded to two decimals.
    pub variance: f64,
    /// Square root of the unrounded variance, rounded to two decimals.
    pub std_dev: f64,
    /// First quartile (nearest-rank), rounded to two decimals.
    pub q1: f64,
    /// Third quartile (nearest-rank), rounded to two decimals.
    pub q3: f64,
    /// Interquartile range `q3 - q1`, rounded to two decimals.
    pub iqr: f64,
    /// Smallest value, unrounded.
    pub min: f64,
    /// Largest value, unrounded.
    pub max: f64,
}

impl DescriptiveSummary {
    /// Parses a comma-separated dataset and summarizes it.
    ///
    /// This is the calculator's entry point: any text in, a summary out, or
    /// `None` when no token parses to a finite number. Unparseable tokens
    /// are dropped without complaint, so `"12, abc, 18"` summarizes the
    /// two-element sample `[12, 18]`. `None` means "nothing to display",
    /// never an exceptional condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::descriptive::DescriptiveSummary;
    ///
    /// let summary =
    ///     DescriptiveSummary::parse("12, 15, 18, 20, 22, 25, 28, 30, 32, 35").unwrap();
    /// assert_eq!(summary.count, 10);
    /// assert_eq!(summary.mean, 23.7);
    /// assert_eq!(summary.median, 23.5);
    ///
    /// assert!(DescriptiveSummary::parse("").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::new(Sample::parse(input))
    }

    /// Computes a summary from raw values.
    ///
    /// The values are collected and sorted internally; the sorted copy is
    /// retained in the summary. Returns `None` for an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::descriptive::DescriptiveSummary;
    ///
    /// let summary = DescriptiveSummary::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(summary.sorted_values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted_values = values.into_iter().collect::<Vec<_>>();
        sorted_values.sort_by(f64::total_cmp);
        Self::from_sorted(sorted_values)
    }

    #[expect(clippy::cast_precision_loss)]
    fn from_sorted(sorted_values: Vec<f64>) -> Option<Self> {
        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;

        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = if count % 2 == 0 {
            (sorted_values[count / 2 - 1] + sorted_values[count / 2]) / 2.0
        } else {
            sorted_values[count / 2]
        };
        let mode = Mode::from_values(&sorted_values);
        let range = max - min;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();
        let quartiles = Quartiles::from_sorted(&sorted_values)?;

        Some(Self {
            count,
            mean: round2(mean),
            median: round2(median),
            mode,
            range: round2(range),
            variance: round2(variance),
            std_dev: round2(std_dev),
            q1: round2(quartiles.q1),
            q3: round2(quartiles.q3),
            iqr: round2(quartiles.iqr),
            min,
            max,
            sorted_values,
        })
    }

    /// The five-number summary `[min, q1, median, q3, max]`.
    #[must_use]
    pub fn five_number_summary(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Rounds to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_INPUT: &str = "12, 15, 18, 20, 22, 25, 28, 30, 32, 35";

    #[test]
    fn test_empty_and_garbage_inputs_are_absent() {
        assert!(DescriptiveSummary::parse("").is_none());
        assert!(DescriptiveSummary::parse("abc, , xyz").is_none());
    }

    #[test]
    fn test_reference_dataset() {
        let summary = DescriptiveSummary::parse(REFERENCE_INPUT).unwrap();
        assert_eq!(summary.count, 10);
        assert_eq!(summary.mean, 23.7);
        assert_eq!(summary.median, 23.5);
        assert_eq!(summary.range, 23.0);
        assert_eq!(summary.min, 12.0);
        assert_eq!(summary.max, 35.0);
        assert!(summary.mode.is_no_mode());
        assert_eq!(summary.variance, 51.81);
        assert_eq!(summary.std_dev, 7.2);
        assert_eq!(summary.q1, 18.0);
        assert_eq!(summary.q3, 30.0);
        assert_eq!(summary.iqr, 12.0);
    }

    #[test]
    fn test_population_variance_divides_by_n() {
        // Hand-computed: mean 19, squared deviations sum 314, 314 / 8 = 39.25.
        // The sample-variance convention (n - 1) would give 44.86 instead.
        let summary = DescriptiveSummary::new([10.0, 12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 30.0])
            .unwrap();
        assert_eq!(summary.mean, 19.0);
        assert_eq!(summary.variance, 39.25);
        assert_eq!(summary.std_dev, 6.26);
    }

    #[test]
    fn test_quartile_indexing_for_eight_elements() {
        let summary = DescriptiveSummary::new([10.0, 12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 30.0])
            .unwrap();
        // q1 = sorted[floor(8 * 0.25)] = sorted[2], q3 = sorted[floor(8 * 0.75)] = sorted[6]
        assert_eq!(summary.q1, 15.0);
        assert_eq!(summary.q3, 25.0);
        assert_eq!(summary.iqr, 10.0);
    }

    #[test]
    fn test_median_of_odd_count() {
        let summary = DescriptiveSummary::parse("3, 1, 2").unwrap();
        assert_eq!(summary.median, 2.0);
    }

    #[test]
    fn test_partial_parse_summarizes_valid_tokens() {
        let summary = DescriptiveSummary::parse("12, abc, 18").unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 15.0);
    }

    #[test]
    fn test_idempotence() {
        let first = DescriptiveSummary::parse(REFERENCE_INPUT).unwrap();
        let second = DescriptiveSummary::parse(REFERENCE_INPUT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_permutation_invariance() {
        let original = DescriptiveSummary::parse("1, 2, 2, 3, 3, 4").unwrap();
        let permuted = DescriptiveSummary::parse("3, 4, 2, 1, 3, 2").unwrap();
        assert_eq!(original, permuted);
    }

    #[test]
    fn test_single_element_summary() {
        let summary = DescriptiveSummary::parse("42").unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.median, 42.0);
        assert!(summary.mode.is_no_mode());
        assert_eq!(summary.range, 0.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.q1, 42.0);
        assert_eq!(summary.q3, 42.0);
    }

    #[test]
    fn test_five_number_summary() {
        let summary = DescriptiveSummary::parse(REFERENCE_INPUT).unwrap();
        assert_eq!(
            summary.five_number_summary(),
            [12.0, 18.0, 23.5, 30.0, 35.0]
        );
    }

    #[test]
    fn test_round2_is_half_away_from_zero() {
        // 0.125 is exactly representable, so 0.125 * 100 is exactly 12.5.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.994_9), 1.99);
    }
}
