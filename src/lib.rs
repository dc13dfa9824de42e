pub mod config;
pub mod error;
pub mod extract;
pub mod helpers;
pub mod pipeline;
pub mod positions;
pub mod season;
pub mod table;
pub mod tactics;

pub use config::Settings;
pub use error::{BenchError, Result};
pub use pipeline::{run, run_with, RunReport};

pub fn version() -> String {
    std::format!("{}, built with statrs 0.13 and csv 1.3", env!("CARGO_PKG_VERSION"))
}

pub fn about() -> String {
    "Consolidates Championship Manager 01/02 benchmark dumps for PAS Giannina \n\
    into season tables, one cross-season dataset, position frequencies and\n\
    per-tactic statistics. Every subdirectory of the source folder is one tactic."
        .to_string()
}

/// Pads every column but the last to `widths`, truncating anything longer.
/// `usize::MAX` marks an unbounded column.
pub fn align_output(outs: &[String], widths: &[usize], seperator: &str) -> String {
    let len: usize = widths.iter().filter(|x| **x < usize::MAX).sum();
    let mut ret = String::with_capacity(len + outs.len());
    for (i, s) in outs.iter().enumerate() {
        let wi = widths[i];
        let slen = s.chars().count().min(wi);
        ret.extend(s.chars().take(slen));
        if i < outs.len() - 1 {
            ret.push_str(seperator);
            if wi < usize::MAX {
                for _ in slen..wi {
                    ret.push(' ');
                }
            }
        }
    }
    ret
}
