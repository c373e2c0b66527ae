use std::fmt;

/// The most frequent value(s) of a sample, as a tagged result.
///
/// A sample has no mode when the set of maximally-frequent values would span
/// the entire sample, i.e. every value occurs exactly once. Otherwise all
/// values sharing the maximum occurrence frequency are reported, ascending.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// The mode set would cover the whole sample; no value stands out.
    NoMode,
    /// All values sharing the maximum occurrence frequency, in ascending
    /// order.
    Values(Vec<f64>),
}

impl Mode {
    /// Computes the mode of a sample.
    ///
    /// Frequencies are counted with exact `f64` equality, so values that are
    /// numerically close but not identical land in separate buckets. A
    /// single-element sample reports no mode: its only value is also the
    /// whole sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::mode::Mode;
    ///
    /// let mode = Mode::from_values(&[2.0, 3.0, 3.0, 5.0, 7.0, 3.0, 8.0]);
    /// assert_eq!(mode, Mode::Values(vec![3.0]));
    ///
    /// let tied = Mode::from_values(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
    /// assert_eq!(tied, Mode::Values(vec![2.0, 3.0]));
    ///
    /// assert_eq!(Mode::from_values(&[5.0, 10.0, 15.0]), Mode::NoMode);
    /// ```
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let counts = frequency_counts(values);
        let Some(max_freq) = counts.iter().map(|&(_, count)| count).max() else {
            return Self::NoMode;
        };

        let mut modes = counts
            .iter()
            .filter(|&&(_, count)| count == max_freq)
            .map(|&(value, _)| value)
            .collect::<Vec<_>>();
        if modes.len() == values.len() {
            return Self::NoMode;
        }
        modes.sort_by(f64::total_cmp);
        Self::Values(modes)
    }

    #[must_use]
    pub fn is_no_mode(&self) -> bool {
        matches!(self, Self::NoMode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMode => f.write_str("no mode"),
            Self::Values(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Counts occurrences per distinct value, in first-appearance order.
///
/// Distinctness is exact `f64` equality.
#[expect(clippy::float_cmp)]
#[must_use]
pub fn frequency_counts(values: &[f64]) -> Vec<(f64, usize)> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_maximum() {
        let mode = Mode::from_values(&[2.0, 3.0, 3.0, 5.0, 7.0, 3.0, 8.0]);
        assert_eq!(mode, Mode::Values(vec![3.0]));
    }

    #[test]
    fn test_tied_maximum_reports_all() {
        let mode = Mode::from_values(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]);
        assert_eq!(mode, Mode::Values(vec![2.0, 3.0]));
    }

    #[test]
    fn test_all_distinct_has_no_mode() {
        assert!(Mode::from_values(&[5.0, 10.0, 15.0, 20.0, 25.0]).is_no_mode());
    }

    #[test]
    fn test_single_element_has_no_mode() {
        // The mode set of a one-element sample covers the whole sample, so
        // the |modes| = n rule applies to it too.
        assert!(Mode::from_values(&[42.0]).is_no_mode());
    }

    #[test]
    fn test_constant_sample_has_a_mode() {
        let mode = Mode::from_values(&[7.0, 7.0, 7.0]);
        assert_eq!(mode, Mode::Values(vec![7.0]));
    }

    #[test]
    fn test_modes_are_sorted_regardless_of_input_order() {
        let mode = Mode::from_values(&[3.0, 3.0, 1.0, 2.0, 2.0, 4.0]);
        assert_eq!(mode, Mode::Values(vec![2.0, 3.0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::NoMode.to_string(), "no mode");
        assert_eq!(Mode::Values(vec![3.0]).to_string(), "3");
        assert_eq!(Mode::Values(vec![2.0, 3.5]).to_string(), "2, 3.5");
    }

    #[test]
    fn test_frequency_counts_first_appearance_order() {
        let counts = frequency_counts(&[2.0, 1.0, 2.0, 3.0, 1.0, 2.0]);
        assert_eq!(counts, vec![(2.0, 3), (1.0, 2), (3.0, 1)]);
    }

    #[test]
    fn test_empty_values_have_no_mode() {
        assert!(Mode::from_values(&[]).is_no_mode());
    }
}
