//! Walks the source folder one tactic directory at a time, then builds both
//! summaries from the finished consolidated file.

use crate::config::{Settings, BENCH_FILE, FORMATTED_FILE};
use crate::error::{io_at, Result};
use crate::extract::extract_rows;
use crate::positions::PositionTable;
use crate::season::Season;
use crate::table::{open_dataset, write_season_file, Consolidated};
use crate::tactics::{self, TacticStats};
use itertools::Itertools;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonOutcome {
    Formatted,
    /// `SkipCompleted` found an existing table and reused it.
    Reused,
    /// No raw dump in the directory.
    Missing,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub seasons: Vec<(String, SeasonOutcome)>,
    pub positions: PositionTable,
    pub tactics: Vec<TacticStats>,
}

/// Subdirectories of `root` in file-name order.
pub fn season_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(io_at(root))? {
        let path = entry.map_err(io_at(root))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs.into_iter().sorted_by(|a, b| a.file_name().cmp(&b.file_name())).collect())
}

pub fn tactic_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Format one directory and hand its table to the consolidated file.
pub fn process_season(dir: &Path, all: &mut Consolidated, skip_completed: bool) -> Result<SeasonOutcome> {
    let tactic = tactic_name(dir);
    let raw_path = dir.join(BENCH_FILE);
    let final_path = dir.join(FORMATTED_FILE);
    if !raw_path.is_file() {
        debug!("no {} in {}, skipping", BENCH_FILE, dir.display());
        return Ok(SeasonOutcome::Missing);
    }

    if skip_completed && final_path.is_file() {
        let text = fs::read_to_string(&final_path).map_err(io_at(&final_path))?;
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        all.append(&lines)?;
        info!("Reused existing table for {}.", tactic);
        return Ok(SeasonOutcome::Reused);
    }

    //dumps come from a Windows game; only marker rows have to be readable
    let bytes = fs::read(&raw_path).map_err(io_at(&raw_path))?;
    let text = String::from_utf8_lossy(&bytes);
    let season = Season::aggregate(&tactic, &extract_rows(&text))?;
    let lines = season.lines();
    write_season_file(&final_path, &lines)?;
    info!("Benchmark operation is completed for {}.", tactic);

    all.append(&lines)?;
    info!("CSV files merged successfully for {}.", tactic);
    Ok(SeasonOutcome::Formatted)
}

/// Both summaries from whatever the consolidated file holds.
pub fn summarize(consolidated: &Path, positions_out: &Path, tactics_out: &Path) -> Result<(PositionTable, Vec<TacticStats>)> {
    let rows = if consolidated.is_file() {
        open_dataset(consolidated)?
    } else {
        Vec::new()
    };
    let positions = PositionTable::from_rows(&rows);
    positions.write(positions_out)?;
    info!("Position frequencies written to {}", positions_out.display());

    let stats = tactics::summarize(&rows);
    tactics::write(&stats, tactics_out)?;
    info!("Tactic statistics written to {}", tactics_out.display());
    Ok((positions, stats))
}

/// Full run. `tick` is called after every season directory.
pub fn run_with<F: FnMut(&str)>(settings: &Settings, mut tick: F) -> Result<RunReport> {
    settings.check_source()?;
    let dirs = season_dirs(&settings.source_folder)?;
    let mut all = Consolidated::create(&settings.consolidation_file)?;

    let mut report = RunReport::default();
    for dir in dirs.iter() {
        let outcome = process_season(dir, &mut all, settings.skip_completed)?;
        let tactic = tactic_name(dir);
        tick(&tactic);
        report.seasons.push((tactic, outcome));
    }

    let (positions, stats) = summarize(
        all.path(),
        &settings.position_stats_file,
        &settings.tactic_stats_file,
    )?;
    report.positions = positions;
    report.tactics = stats;
    Ok(report)
}

pub fn run(settings: &Settings) -> Result<RunReport> {
    run_with(settings, |_| ())
}

#[cfg(test)]
mod test {
    use super::*;
    use claim::assert_ok;
    use tempfile::TempDir;

    #[test]
    fn test_season_dirs_sorted_and_files_ignored() {
        let root = assert_ok!(TempDir::new());
        for d in ["b", "a", "c"].iter() {
            assert_ok!(fs::create_dir(root.path().join(d)));
        }
        assert_ok!(fs::write(root.path().join("notes.txt"), "x"));
        let dirs = assert_ok!(season_dirs(root.path()));
        let names: Vec<String> = dirs.iter().map(|d| tactic_name(d)).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_dump_is_skipped() {
        let root = assert_ok!(TempDir::new());
        let dir = root.path().join("4-4-2");
        assert_ok!(fs::create_dir(&dir));
        let mut all = assert_ok!(Consolidated::create(&root.path().join("all.csv")));
        let outcome = assert_ok!(process_season(&dir, &mut all, false));
        assert_eq!(outcome, SeasonOutcome::Missing);
        assert_eq!(all.seasons(), 0);
        assert!(!dir.join(FORMATTED_FILE).exists());
    }

    #[test]
    fn test_skip_completed_reuses_table() {
        let root = assert_ok!(TempDir::new());
        let dir = root.path().join("4-4-2");
        assert_ok!(fs::create_dir(&dir));
        assert_ok!(fs::write(dir.join(BENCH_FILE), "garbage that would not parse"));
        assert_ok!(fs::write(dir.join(FORMATTED_FILE), "Pos,Team\n1st,kept\n"));
        let out = root.path().join("all.csv");
        let mut all = assert_ok!(Consolidated::create(&out));
        let outcome = assert_ok!(process_season(&dir, &mut all, true));
        assert_eq!(outcome, SeasonOutcome::Reused);
        assert_eq!(assert_ok!(fs::read_to_string(&out)), "Pos,Team\n1st,kept\n");
    }
}
