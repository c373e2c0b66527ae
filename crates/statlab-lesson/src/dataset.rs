use rand::Rng;
use rand_distr::{Distribution as _, Normal};

/// A named example dataset offered by the calculator.
#[derive(Debug, Clone, Copy)]
pub struct PresetDataset {
    pub label: &'static str,
    /// The dataset in the calculator's input format.
    pub values: &'static str,
}

/// The dataset the calculator starts with.
pub const DEFAULT_INPUT: &str = "12, 15, 18, 20, 22, 25, 28, 30, 32, 35";

/// Practice datasets the learner can load instead of typing their own.
pub const PRESETS: [PresetDataset; 3] = [
    PresetDataset {
        label: "Student Test Scores",
        values: "75, 80, 82, 85, 88, 90, 92, 95, 98",
    },
    PresetDataset {
        label: "Employee Ages",
        values: "23, 25, 29, 32, 35, 38, 40, 42, 45, 48",
    },
    PresetDataset {
        label: "Product Prices",
        values: "100, 105, 102, 110, 98, 115, 103, 108, 112",
    },
];

/// Exam scores used by the Data Presentation section's frequency table and
/// charts.
pub const STUDENT_SCORES: [f64; 18] = [
    65.0, 72.0, 78.0, 82.0, 85.0, 88.0, 90.0, 92.0, 95.0, 98.0, 100.0, 75.0, 80.0, 85.0, 88.0,
    90.0, 93.0, 96.0,
];

/// Worked example walked through in the Central Tendency section.
pub const CENTRAL_TENDENCY_EXAMPLE: [f64; 8] = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0];

/// Worked example walked through in the Dispersion section.
pub const DISPERSION_EXAMPLE: [f64; 8] = [10.0, 12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 30.0];

/// Generates a fresh practice dataset in the calculator's input format.
///
/// Values are drawn from a normal distribution and rendered as whole
/// numbers, which keeps the generated data readable while still producing
/// ties often enough to exercise the mode.
///
/// # Panics
///
/// Panics if `std_dev` is not finite and non-negative.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng as _, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let data = statlab_lesson::dataset::random_dataset(&mut rng, 10, 100.0, 15.0);
/// assert_eq!(data.split(',').count(), 10);
/// ```
pub fn random_dataset<R>(rng: &mut R, len: usize, mean: f64, std_dev: f64) -> String
where
    R: Rng + ?Sized,
{
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..len)
        .map(|_| format!("{:.0}", normal.sample(rng)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};
    use statlab_stats::{descriptive::DescriptiveSummary, sample::Sample};

    use super::*;

    #[test]
    fn test_presets_parse_to_full_samples() {
        for preset in PRESETS {
            let sample = Sample::parse(preset.values);
            assert_eq!(
                sample.len(),
                preset.values.split(',').count(),
                "every token of {:?} should parse",
                preset.label
            );
        }
        assert_eq!(Sample::parse(DEFAULT_INPUT).len(), 10);
    }

    #[test]
    fn test_random_dataset_parses_to_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = random_dataset(&mut rng, 12, 100.0, 15.0);
        assert_eq!(Sample::parse(&data).len(), 12);
    }

    #[test]
    fn test_random_dataset_is_deterministic_for_a_seed() {
        let first = random_dataset(&mut StdRng::seed_from_u64(9), 8, 50.0, 5.0);
        let second = random_dataset(&mut StdRng::seed_from_u64(9), 8, 50.0, 5.0);
        assert_eq!(first, second);
    }

    // The narrative sections quote statistics for their worked examples;
    // these tests keep the quoted numbers honest.

    #[test]
    fn test_central_tendency_example_matches_narrative() {
        let summary = DescriptiveSummary::new(CENTRAL_TENDENCY_EXAMPLE).unwrap();
        assert_eq!(summary.mean, 21.25);
        assert_eq!(summary.median, 21.0);
    }

    #[test]
    fn test_dispersion_example_matches_narrative() {
        let summary = DescriptiveSummary::new(DISPERSION_EXAMPLE).unwrap();
        assert_eq!(summary.mean, 19.0);
        assert_eq!(summary.range, 20.0);
        assert_eq!(summary.variance, 39.25);
        assert_eq!(summary.std_dev, 6.26);
    }
}
