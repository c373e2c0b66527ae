use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use statlab_stats::descriptive::DescriptiveSummary;

use crate::{schema::SummaryRecord, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Dataset as comma-separated numbers; reads stdin when omitted
    data: Option<String>,
    /// Read the dataset from a file instead of the command line
    #[clap(long, conflicts_with = "data")]
    file: Option<PathBuf>,
    /// Emit the summary as JSON
    #[clap(long)]
    json: bool,
    /// Write the JSON to this file instead of stdout
    #[clap(long, requires = "json")]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg {
        data,
        file,
        json,
        output,
    } = arg;

    let input = read_input(data.as_deref(), file.as_deref())?;
    let Some(summary) = DescriptiveSummary::parse(&input) else {
        // An empty sample is "nothing to display", not a failure.
        eprintln!("No usable numbers in the input; nothing to summarize.");
        return Ok(());
    };

    if *json {
        Output::save_json(&SummaryRecord::from(&summary), output.clone())?;
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn read_input(data: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(data) = data {
        return Ok(data.to_string());
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()));
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read dataset from stdin")?;
    Ok(input)
}

fn print_summary(summary: &DescriptiveSummary) {
    let values = summary
        .sorted_values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    // Mode renders as text, so pad it through a String for the column.
    let mode = summary.mode.to_string();
    println!("Sample size: {}", summary.count);
    println!("Sorted data: {values}");
    println!();
    println!("  {:<24} {:>10}", "Measure", "Value");
    println!("  {}", "-".repeat(35));
    println!("  {:<24} {:>10.2}", "Mean (average)", summary.mean);
    println!("  {:<24} {:>10.2}", "Median", summary.median);
    println!("  {:<24} {mode:>10}", "Mode");
    println!("  {:<24} {:>10.2}", "Range", summary.range);
    println!("  {:<24} {:>10.2}", "Variance (population)", summary.variance);
    println!("  {:<24} {:>10.2}", "Std deviation", summary.std_dev);
    println!("  {:<24} {:>10.2}", "Q1 (25th percentile)", summary.q1);
    println!("  {:<24} {:>10.2}", "Q3 (75th percentile)", summary.q3);
    println!("  {:<24} {:>10.2}", "IQR", summary.iqr);
    println!("  {:<24} {:>10}", "Minimum", summary.min);
    println!("  {:<24} {:>10}", "Maximum", summary.max);
}
