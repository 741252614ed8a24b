mod args;
mod json;
mod text;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::Cli;

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let options = cli.to_options();
    let outcome = codesim_core::run_batch(&cli.paths, &options)?;
    let report = &outcome.result;

    if cli.json {
        let stats = cli.stats.then_some(&outcome.stats);
        json::write_json(&json::map_report(report, !cli.no_tokens, stats))?;
    } else {
        if !cli.no_tokens {
            print!("{}", text::format_tokens(&report.units));
            println!();
        }
        print!("{}", text::format_matrix(&report.matrix));
        if !report.similar_pairs.is_empty() {
            println!();
            print!("{}", text::format_similar_pairs(&report.similar_pairs));
        }
        if cli.stats {
            eprint!("{}", text::format_batch_stats(&outcome.stats));
        }
    }

    if cli.strict && text::has_degraded_units(&outcome.stats) {
        return Ok(1);
    }
    Ok(0)
}
