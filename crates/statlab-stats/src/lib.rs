//! Descriptive statistics for the statlab lesson.
//!
//! This crate is the computational core behind the lesson's embedded
//! calculator: it turns a comma-separated line of numbers into the standard
//! battery of descriptive measures (mean, median, mode, range, variance,
//! standard deviation, quartiles, five-number summary).
//!
//! # Modules
//!
//! - [`sample`]: Parsing raw text input into a numeric sample
//! - [`descriptive`]: The combined summary of a sample
//! - [`mode`]: Most-frequent-value computation with a tagged "no mode" result
//! - [`quartiles`]: Nearest-rank quartiles and interquartile range
//! - [`frequency`]: Grouped frequency distributions for tables and charts
//!
//! # Examples
//!
//! ## Summarizing user input
//!
//! ```
//! use statlab_stats::descriptive::DescriptiveSummary;
//!
//! let summary = DescriptiveSummary::parse("12, 15, 18, 20, 22").unwrap();
//! assert_eq!(summary.count, 5);
//! assert_eq!(summary.mean, 17.4);
//! assert_eq!(summary.median, 18.0);
//! ```
//!
//! ## Input with no usable numbers
//!
//! ```
//! use statlab_stats::descriptive::DescriptiveSummary;
//!
//! assert!(DescriptiveSummary::parse("abc, , xyz").is_none());
//! ```
//!
//! ## Grouping values into a frequency table
//!
//! ```
//! use statlab_stats::frequency::FrequencyTable;
//!
//! let scores = [65.0, 72.0, 78.0, 82.0, 85.0, 91.0];
//! let table = FrequencyTable::new(&scores, 10.0).unwrap();
//! assert_eq!(table.total(), 6);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod mode;
pub mod quartiles;
pub mod sample;
