use std::{cell::RefCell, path::PathBuf, rc::Rc};

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use ratatui_shell::ScreenStack;

use crate::{command::learn::screens::LessonScreen, util};

mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LearnArg {
    /// File where lesson progress is kept between runs
    #[clap(long, default_value = "./data/progress.json")]
    progress_file: PathBuf,
    /// Seed for the practice-dataset generator
    #[clap(long)]
    seed: Option<u64>,
}

impl Default for LearnArg {
    fn default() -> Self {
        Self {
            progress_file: PathBuf::from("./data/progress.json"),
            seed: None,
        }
    }
}

pub(crate) fn run(arg: &LearnArg) -> anyhow::Result<()> {
    let LearnArg {
        progress_file,
        seed,
    } = arg;

    let progress = Rc::new(RefCell::new(util::load_progress(progress_file)));
    let rng = match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(*seed),
        None => Pcg64Mcg::from_rng(&mut rand::rng()),
    };

    let screen = LessonScreen::new(Rc::clone(&progress), rng);
    let mut stack = ScreenStack::new(Box::new(screen));
    ratatui_shell::run(&mut stack)?;

    util::save_progress(progress_file, &progress.borrow())?;
    eprintln!("Progress saved to {}", progress_file.display());
    Ok(())
}
