use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use openominoes::generation::Equivalence;

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, shapes: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    if let Some(len) = bar.length() {
        let pos_width = format!("{}", len).len();

        let template = format!(
            "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}"
        );

        bar.set_style(
            ProgressStyle::with_template(&template)
                .unwrap()
                .progress_chars("#>-"),
        );
    }

    bar.finish_with_message(format!(
        "Done! Found {shapes} unique shapes (N = {n}) in {secs}.{micros} s"
    ));
}

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}} remaining: [{{eta_precise}}]");

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Enumerate free polyominoes with a specific amount of cells present
    Enumerate(EnumerateOpts),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N value for which to calculate all unique polyominoes.
    pub n: usize,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,

    /// The equivalence strategy used to deduplicate shapes.
    #[clap(long, short = 'm', value_enum, default_value = "canonical")]
    pub mode: EquivalenceMode,

    /// Render every shape as a character grid once the run completes.
    #[clap(long, short = 'r')]
    pub render: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EquivalenceMode {
    Canonical,
    Pairwise,
}

impl From<EquivalenceMode> for Equivalence {
    fn from(value: EquivalenceMode) -> Self {
        match value {
            EquivalenceMode::Canonical => Equivalence::Canonical,
            EquivalenceMode::Pairwise => Equivalence::Pairwise,
        }
    }
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(r) => enumerate(&r),
    }
}
