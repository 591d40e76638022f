/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for coordination-rs

use anyhow::Context;
use clap::Parser;
use coordination_rs::cli::Cli;
use coordination_rs::{CoordinationAnalysis, CoordinationLabel};

fn main() -> anyhow::Result<()> {
    // Initialize logging, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("coordination-rs v{}", coordination_rs::VERSION);

    let config = cli
        .analysis_config()
        .context("failed to load configuration")?;
    let analysis = CoordinationAnalysis::new(config).context("invalid configuration")?;

    let summary = analysis
        .run(&cli.structure)
        .with_context(|| format!("failed to analyse structure file {}", cli.structure.display()))?;

    for (i, label) in summary.labels.iter().enumerate() {
        println!("{} - {}", summary.atom_name(i), label);
    }

    println!(
        "{} {} atoms: {} octahedral, {} tetrahedral, {} none, {} indeterminate",
        summary.labels.len(),
        summary.element,
        summary.count(CoordinationLabel::Octahedral),
        summary.count(CoordinationLabel::Tetrahedral),
        summary.count(CoordinationLabel::None),
        summary.count(CoordinationLabel::Indeterminate),
    );

    Ok(())
}
