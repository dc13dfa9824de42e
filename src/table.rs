use crate::error::{io_at, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

fn write_all<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Overwrite `path` with `lines`, newline terminated.
pub fn write_season_file(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).map_err(io_at(path))?;
    write_all(&mut BufWriter::new(file), lines).map_err(io_at(path))
}

/// The running cross-season file. Every season is appended in the order it
/// was handed over; only the first one keeps its header line.
#[derive(Debug)]
pub struct Consolidated {
    path: PathBuf,
    seasons: usize,
}

impl Consolidated {
    /// Start a fresh file, discarding whatever a previous run left behind.
    pub fn create(path: &Path) -> Result<Consolidated> {
        match fs::remove_file(path) {
            Ok(()) => (),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
            Err(e) => return Err(io_at(path)(e)),
        }
        Ok(Consolidated {
            path: path.to_path_buf(),
            seasons: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn seasons(&self) -> usize {
        self.seasons
    }

    /// `lines` is a full season table, header first.
    pub fn append(&mut self, lines: &[String]) -> Result<()> {
        let skip = if self.seasons == 0 { 0 } else { 1 };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_at(&self.path))?;
        let body = lines.get(skip..).unwrap_or(&[]);
        write_all(&mut BufWriter::new(file), body).map_err(io_at(&self.path))?;
        self.seasons += 1;
        Ok(())
    }
}

/// Data rows of a consolidated file (header skipped). Rows may have any
/// number of columns; deciding what is usable is up to the caller.
pub fn read_dataset<R: std::io::Read>(input: R) -> Result<Vec<csv::StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(input);
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    Ok(rows)
}

pub fn open_dataset(path: &Path) -> Result<Vec<csv::StringRecord>> {
    let file = File::open(path).map_err(io_at(path))?;
    read_dataset(file)
}

/// Summary files are plain comma separated text, never quoted.
pub fn summary_writer(path: &Path) -> Result<csv::Writer<File>> {
    let file = File::create(path).map_err(io_at(path))?;
    Ok(csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(file))
}
