extern crate clap;
use anyhow::{Context, Result};
use clap::{App, Arg};
use std::path::Path;
use tbl_bench::align_output;
use tbl_bench::helpers::print_spread;
use tbl_bench::table::open_dataset;
use tbl_bench::tactics;

/**
 * Per-tactic mean / extrema / spread from an existing consolidated file.
 */
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let about = tbl_bench::about()
        + "\n This tool rebuilds the tactic statistics from a consolidated file and prints them.";
    let input_args = App::new("tbl-stats")
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
                .default_value("TacticStats.csv")
                .help("Where to write the tactic statistics CSV"),
        )
        .arg(
            Arg::with_name("out_format")
                .required(false)
                .short("f")
                .default_value("wsv")
                .possible_values(&["wsv", "tsv", "csv", "vnl"])
                .help("Console format which can be one of Vnlog or Whitespace-,  Tab-, or Comma-seperated."),
        )
        .arg(
            Arg::with_name("plot")
                .long("plot")
                .help("Also draw points mean +/- std dev per tactic on stderr"),
        )
        .get_matches();

    let dataset = Path::new(input_args.value_of("dataset").unwrap_or_default());
    let out = Path::new(input_args.value_of("out").unwrap_or("TacticStats.csv"));
    let rows = open_dataset(dataset).with_context(|| std::format!("reading {}", dataset.display()))?;
    let stats = tactics::summarize(&rows);
    tactics::write(&stats, out)?;

    let (header_start, seperator) = match input_args.value_of("out_format").unwrap_or("wsv") {
        "tsv" => ("", "\t"),
        "csv" => ("", ","),
        "vnl" => ("# ", " "),
        _ => ("", " "),
    };
    //pad only the whitespace formats
    let width = |w: usize| if seperator == " " { w } else { usize::MAX };
    let mut lengths = vec![width(12)];
    lengths.extend(std::iter::repeat(width(8)).take(tactics::HEADER.len() - 2));
    lengths.push(usize::MAX);

    let header: Vec<String> = tactics::HEADER.iter().map(|h| h.replace(' ', "")).collect();
    println!("{}{}", header_start, align_output(&header, &lengths, seperator));
    for s in stats.iter() {
        println!("{}", align_output(&s.record(), &lengths, seperator));
    }

    if input_args.is_present("plot") && !stats.is_empty() {
        let lo = stats.iter().map(|s| s.points.min).min().unwrap_or(0) as f64;
        let hi = stats.iter().map(|s| s.points.max).max().unwrap_or(0) as f64;
        eprintln!("Points per season, {} to {}", lo, hi);
        for s in stats.iter() {
            print_spread(&s.tactic, s.points.avg, s.points.std_dev, 40, lo, hi);
        }
    }
    Ok(())
}
