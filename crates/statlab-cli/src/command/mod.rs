use clap::{Parser, Subcommand};

use self::{learn::LearnArg, summarize::SummarizeArg};

mod learn;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Work through the interactive lesson
    Learn(#[clap(flatten)] LearnArg),
    /// Summarize a dataset without the TUI
    Summarize(#[clap(flatten)] SummarizeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Learn(LearnArg::default())) {
        Mode::Learn(arg) => learn::run(&arg)?,
        Mode::Summarize(arg) => summarize::run(&arg)?,
    }
    Ok(())
}
