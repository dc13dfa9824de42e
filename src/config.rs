//! Run settings, read from the same `appsettings.json` the benchmark harness
//! writes next to the game install.

use crate::error::{io_at, BenchError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Substring identifying the tracked team's table row.
pub const TEAM_MARKER: &str = "PAS Giannina";
/// Home/away qualifier tokens dropped from every extracted row.
pub const MARKER_TOKENS: [&str; 2] = ["C", "R"];
/// Raw dump expected in every season directory.
pub const BENCH_FILE: &str = "benchresult.txt";
/// Formatted season table written beside the raw dump.
pub const FORMATTED_FILE: &str = "BenchResultFormatted.csv";

pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    pub source_folder: PathBuf,
    pub consolidation_file: PathBuf,
    #[serde(default = "default_position_stats")]
    pub position_stats_file: PathBuf,
    #[serde(default = "default_tactic_stats")]
    pub tactic_stats_file: PathBuf,
    #[serde(default)]
    pub skip_completed: bool,
}

fn default_position_stats() -> PathBuf {
    PathBuf::from("PositionStats.csv")
}

fn default_tactic_stats() -> PathBuf {
    PathBuf::from("TacticStats.csv")
}

/// Command-line values that win over the settings file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub source_folder: Option<PathBuf>,
    pub consolidation_file: Option<PathBuf>,
    pub position_stats_file: Option<PathBuf>,
    pub tactic_stats_file: Option<PathBuf>,
    pub skip_completed: bool,
}

impl Settings {
    /// Settings file if present, flags on top. Without a file both the
    /// source folder and the consolidation file must come from flags.
    pub fn resolve(path: &Path, o: Overrides) -> Result<Settings> {
        let mut s = if path.is_file() {
            Settings::load(path)?
        } else {
            match (o.source_folder.clone(), o.consolidation_file.clone()) {
                (Some(source_folder), Some(consolidation_file)) => Settings {
                    source_folder,
                    consolidation_file,
                    position_stats_file: default_position_stats(),
                    tactic_stats_file: default_tactic_stats(),
                    skip_completed: false,
                },
                _ => {
                    return Err(BenchError::Io {
                        path: path.to_path_buf(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "settings file missing and no --source/--out given",
                        ),
                    })
                }
            }
        };
        if let Some(v) = o.source_folder {
            s.source_folder = v;
        }
        if let Some(v) = o.consolidation_file {
            s.consolidation_file = v;
        }
        if let Some(v) = o.position_stats_file {
            s.position_stats_file = v;
        }
        if let Some(v) = o.tactic_stats_file {
            s.tactic_stats_file = v;
        }
        s.skip_completed |= o.skip_completed;
        Ok(s)
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Settings> {
        serde_json::from_str(text).map_err(|source| BenchError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Settings> {
        let text = std::fs::read_to_string(path).map_err(io_at(path))?;
        Settings::from_json(path, &text)
    }

    /// Fails before anything is written if the source folder is gone.
    pub fn check_source(&self) -> Result<()> {
        if self.source_folder.is_dir() {
            Ok(())
        } else {
            Err(BenchError::MissingSource(self.source_folder.clone()))
        }
    }
}
