extern crate clap;
use anyhow::{Context, Result};
use clap::{App, Arg};
use pbr::ProgressBar;
use std::path::{Path, PathBuf};
use tbl_bench::config::{Overrides, DEFAULT_SETTINGS_FILE};
use tbl_bench::pipeline::{self, SeasonOutcome};
use tbl_bench::Settings;

/**
 * Formats every tactic directory under the source folder, appends them to the
 * consolidated file and writes the position / tactic summaries.
 */
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input_args = App::new("tbl-bench")
        .version(&tbl_bench::version()[..])
        .about(&tbl_bench::about()[..])
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .default_value(DEFAULT_SETTINGS_FILE)
                .help("JSON settings file (SourceFolder, ConsolidationFile, PositionStatsFile, TacticStatsFile, SkipCompleted)"),
        )
        .arg(
            Arg::with_name("source")
                .short("s")
                .long("source")
                .takes_value(true)
                .help("Folder holding one subdirectory per tactic, each with a benchresult.txt"),
        )
        .arg(
            Arg::with_name("out")
                .short("o")
                .long("out")
                .takes_value(true)
                .help("Consolidated CSV across all tactics"),
        )
        .arg(
            Arg::with_name("positions")
                .long("positions")
                .takes_value(true)
                .help("Position frequency CSV"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .takes_value(true)
                .help("Tactic statistics CSV"),
        )
        .arg(
            Arg::with_name("skip-completed")
                .long("skip-completed")
                .help("Reuse an existing BenchResultFormatted.csv instead of re-reading the dump"),
        )
        .get_matches();

    let path_arg = |name: &str| input_args.value_of(name).map(PathBuf::from);
    let overrides = Overrides {
        source_folder: path_arg("source"),
        consolidation_file: path_arg("out"),
        position_stats_file: path_arg("positions"),
        tactic_stats_file: path_arg("stats"),
        skip_completed: input_args.is_present("skip-completed"),
    };
    let config = Path::new(input_args.value_of("config").unwrap_or(DEFAULT_SETTINGS_FILE));
    let settings = Settings::resolve(config, overrides)
        .with_context(|| std::format!("loading settings from {}", config.display()))?;

    //fail before anything on disk is touched
    settings.check_source()?;
    let season_count = pipeline::season_dirs(&settings.source_folder)?.len();

    let mut pb = ProgressBar::on(std::io::stderr(), season_count as u64);
    pb.message("seasons ");
    let report = pipeline::run_with(&settings, |tactic| {
        pb.message(&std::format!("{} ", tactic));
        pb.inc();
    })?;
    pb.finish_print("done");

    let count = |outcome: SeasonOutcome| report.seasons.iter().filter(|(_, o)| *o == outcome).count();
    let formatted = count(SeasonOutcome::Formatted);
    let reused = count(SeasonOutcome::Reused);
    println!(
        "{} seasons formatted, {} reused, {} without results",
        formatted,
        reused,
        report.seasons.len() - formatted - reused
    );
    println!("Consolidated: {}", settings.consolidation_file.display());
    println!(
        "Positions:    {} ({} tactics)",
        settings.position_stats_file.display(),
        report.positions.tactics().count()
    );
    println!(
        "Statistics:   {} ({} tactics)",
        settings.tactic_stats_file.display(),
        report.tactics.len()
    );
    Ok(())
}
