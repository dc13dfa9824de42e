use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("The specified directory {} does not exist! Please update the settings file!", .0.display())]
    MissingSource(PathBuf),
    #[error("could not read settings from {}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("i/o failure on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("season '{season}', row {line}: column {column} is not an integer ('{value}')")]
    Parse {
        season: String,
        line: usize,
        column: usize,
        value: String,
    },
    #[error("season '{season}', row {line}: running totals overflow")]
    Overflow { season: String, line: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;

//attach the offending path to a bare io error
pub(crate) fn io_at<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> BenchError {
    let path = path.into();
    move |source| BenchError::Io { path, source }
}
