/// A flat numeric sample parsed from free-text user input.
///
/// A sample has no identity beyond its values and is recomputed fresh on
/// every calculation request. It may be empty when no token of the input
/// parses to a finite number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Parses a comma-separated list of numbers.
    ///
    /// Tokens are split on commas, trimmed, and parsed as `f64`. Tokens that
    /// do not parse to a finite number are silently dropped; that covers
    /// non-numeric text, the empty tokens left by doubled or trailing commas,
    /// and explicit infinities or NaNs. Dropping is not an error: a partially
    /// garbled input still yields the sample of its valid tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::sample::Sample;
    ///
    /// let sample = Sample::parse("12, abc, 18,");
    /// assert_eq!(sample.values(), &[12.0, 18.0]);
    ///
    /// assert!(Sample::parse("").is_empty());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let values = input
            .split(',')
            .filter_map(|token| token.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect();
        Self { values }
    }

    /// The parsed values, in input order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the sample, returning its values in input order.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl IntoIterator for Sample {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert!(Sample::parse("").is_empty());
        assert!(Sample::parse("   ").is_empty());
    }

    #[test]
    fn test_all_garbage_is_empty() {
        assert!(Sample::parse("abc, , xyz").is_empty());
    }

    #[test]
    fn test_mixed_input_keeps_valid_tokens() {
        let sample = Sample::parse("12, abc, 18");
        assert_eq!(sample.values(), &[12.0, 18.0]);
    }

    #[test]
    fn test_trailing_and_doubled_commas() {
        let sample = Sample::parse("1,,2,");
        assert_eq!(sample.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let sample = Sample::parse("  1.5 ,\t2.5 ");
        assert_eq!(sample.values(), &[1.5, 2.5]);
    }

    #[test]
    fn test_non_finite_tokens_are_dropped() {
        assert!(Sample::parse("inf, -inf, NaN").is_empty());
    }

    #[test]
    fn test_scientific_notation_and_negatives() {
        let sample = Sample::parse("-3, 1e2, 0.5");
        assert_eq!(sample.values(), &[-3.0, 100.0, 0.5]);
    }
}
