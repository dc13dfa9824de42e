extern crate clap;
use anyhow::{Context, Result};
use clap::{App, Arg};
use std::path::Path;
use tbl_bench::positions::PositionTable;
use tbl_bench::table::open_dataset;

/**
 * Re-counts table positions per tactic from an existing consolidated file.
 */
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let about = tbl_bench::about()
        + "\n This tool only rebuilds the position frequency table from a consolidated file.";
    let input_args = App::new("tbl-positions")
        .version(&tbl_bench::version()[..])
        .about(&about[..])
        .arg(
            Arg::with_name("dataset")
                .required(true)
                .help("Consolidated CSV written by tbl-bench"),
        )
        .arg(
            Arg::with_name("out")
                .short("o")
                .long("out")
                .takes_value(true)
                .default_value("PositionStats.csv")
                .help("Where to write the position frequency CSV"),
        )
        .get_matches();

    let dataset = Path::new(input_args.value_of("dataset").unwrap_or_default());
    let out = Path::new(input_args.value_of("out").unwrap_or("PositionStats.csv"));
    let rows = open_dataset(dataset).with_context(|| std::format!("reading {}", dataset.display()))?;
    let table = PositionTable::from_rows(&rows);
    table.write(out)?;

    for row in table.rows() {
        println!("{}", row.join(" "));
    }
    eprintln!("Wrote {} tactics to {}", table.tactics().count(), out.display());
    Ok(())
}
