use anyhow::{Result, bail};
use clap::Parser;
use listrev_core::{Chain, Direction, is_monotonic, length, render, reverse};
use serde::Serialize;
use tracing::{info, warn};

mod cli;
mod logging;

use cli::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct ReversalReport {
    before: Vec<i32>,
    after: Vec<i32>,
    length_before: usize,
    length_after: usize,
    ascending_before: bool,
    descending_after: bool,
    #[serde(skip)]
    printed_before: String,
    #[serde(skip)]
    printed_after: String,
}

impl ReversalReport {
    fn passed(&self) -> bool {
        self.length_before == self.length_after
            && self.before.iter().rev().eq(self.after.iter())
            && (!self.ascending_before || self.descending_after)
    }
}

fn check_reversal(mut chain: Chain) -> ReversalReport {
    let printed_before = chain.to_string();
    let before: Vec<i32> = render(&chain).collect();
    let length_before = length(&chain);
    let ascending_before = is_monotonic(&chain, Direction::Ascending);

    reverse(&mut chain);

    ReversalReport {
        before,
        after: render(&chain).collect(),
        length_before,
        length_after: length(&chain),
        ascending_before,
        descending_after: is_monotonic(&chain, Direction::Descending),
        printed_before,
        printed_after: chain.to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_json)?;

    let chain = Chain::from_values(cli.list_values());
    info!(nodes = chain.len(), "built chain");

    let report = check_reversal(chain);

    match cli.format {
        OutputFormat::Text => {
            println!("{}", report.printed_before);
            println!("{}", report.printed_after);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.passed() {
        warn!(?report, "reversal check failed");
        bail!("reversal check failed");
    }

    info!(
        length = report.length_after,
        descending = report.descending_after,
        "reversal check passed"
    );
    Ok(())
}
