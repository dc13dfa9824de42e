//! Per-tactic descriptive statistics over the real (non-Total) rows of the
//! consolidated dataset.

use crate::error::Result;
use crate::table::summary_writer;
use csv::StringRecord;
use itertools::{Itertools, MinMaxResult};
use log::warn;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use std::path::Path;

const POS_FIELD: usize = 0;
const HOME_FOR: usize = 7;
const HOME_AGAINST: usize = 8;
const AWAY_FOR: usize = 12;
const AWAY_AGAINST: usize = 13;
const POINTS: usize = 14;
const TACTIC_FIELD: usize = 16;
const MIN_FIELDS: usize = 15;

pub const HEADER: [&str; 17] = [
    "Tactic Name",
    "Avg Goals",
    "Avg Conceded",
    "Avg GD",
    "Avg Points",
    "Max Points",
    "Min Points",
    "Points Std Dev",
    "Max Goals",
    "Min Goals",
    "Goals Std Dev",
    "Max Conceded",
    "Min Conceded",
    "Conceded Std Dev",
    "Max GD",
    "Min GD",
    "GD Std Dev",
];

/// One season's outcome for a tactic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

impl Sample {
    pub fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }

    fn from_row(row: &StringRecord) -> Option<Sample> {
        let int = |idx: usize| row.get(idx).and_then(|f| f.trim().parse::<i64>().ok());
        Some(Sample {
            goals_for: int(HOME_FOR)? + int(AWAY_FOR)?,
            goals_against: int(HOME_AGAINST)? + int(AWAY_AGAINST)?,
            points: int(POINTS)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub avg: f64,
    pub max: i64,
    pub min: i64,
    /// population standard deviation (divides by n)
    pub std_dev: f64,
}

impl Metric {
    /// `None` for an empty slice; there is nothing to average.
    pub fn of(values: &[i64]) -> Option<Metric> {
        let (min, max) = match values.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        let xs: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        Some(Metric {
            avg: xs.iter().mean(),
            max,
            min,
            std_dev: xs.iter().population_std_dev(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TacticStats {
    pub tactic: String,
    pub seasons: usize,
    pub goals: Metric,
    pub conceded: Metric,
    pub goal_difference: Metric,
    pub points: Metric,
}

impl TacticStats {
    pub fn from_samples(tactic: &str, samples: &[Sample]) -> Option<TacticStats> {
        let pick = |f: fn(&Sample) -> i64| samples.iter().map(f).collect::<Vec<_>>();
        Some(TacticStats {
            tactic: tactic.to_string(),
            seasons: samples.len(),
            goals: Metric::of(&pick(|s| s.goals_for))?,
            conceded: Metric::of(&pick(|s| s.goals_against))?,
            goal_difference: Metric::of(&pick(Sample::goal_difference))?,
            points: Metric::of(&pick(|s| s.points))?,
        })
    }

    /// Column order follows `HEADER`.
    pub fn record(&self) -> Vec<String> {
        let f2 = |v: f64| std::format!("{:.2}", v);
        vec![
            self.tactic.clone(),
            f2(self.goals.avg),
            f2(self.conceded.avg),
            f2(self.goal_difference.avg),
            f2(self.points.avg),
            self.points.max.to_string(),
            self.points.min.to_string(),
            f2(self.points.std_dev),
            self.goals.max.to_string(),
            self.goals.min.to_string(),
            f2(self.goals.std_dev),
            self.conceded.max.to_string(),
            self.conceded.min.to_string(),
            f2(self.conceded.std_dev),
            self.goal_difference.max.to_string(),
            self.goal_difference.min.to_string(),
            f2(self.goal_difference.std_dev),
        ]
    }
}

/// Real rows grouped by tactic name; Total rows and short rows left out.
pub fn group_samples(rows: &[StringRecord]) -> BTreeMap<String, Vec<Sample>> {
    let mut groups: BTreeMap<String, Vec<Sample>> = BTreeMap::new();
    for row in rows {
        let tactic = match row.get(TACTIC_FIELD) {
            Some(t) => t.trim(),
            None => continue,
        };
        let group = groups.entry(tactic.to_string()).or_insert_with(Vec::new);
        if row.len() < MIN_FIELDS || row[POS_FIELD].trim() == "Total" {
            continue;
        }
        match Sample::from_row(row) {
            Some(s) => group.push(s),
            None => warn!("tactic stats: unparsable row for '{}' skipped: {:?}", tactic, row),
        }
    }
    groups
}

/// Tactics with no usable rows produce nothing.
pub fn summarize(rows: &[StringRecord]) -> Vec<TacticStats> {
    group_samples(rows)
        .iter()
        .filter_map(|(tactic, samples)| TacticStats::from_samples(tactic, samples))
        .collect()
}

pub fn write(stats: &[TacticStats], path: &Path) -> Result<()> {
    let mut out = summary_writer(path)?;
    out.write_record(&HEADER)?;
    for s in stats {
        out.write_record(&s.record())?;
    }
    out.flush().map_err(crate::error::io_at(path))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::table::read_dataset;
    use claim::{assert_none, assert_ok, assert_some};

    const DATASET: &str = "\
Pos,Team, ,Pld,Won,Drn,Lst,For,Ag,Won,Drn,Lst,For,Ag,Pts, ,tactic_name,scored-conceded,points,games,wins_draws_losses
1st,PAS,Giannina,26,10,2,1,30,9,8,3,2,25,14,71, ,4-4-2,55-23,71,26,18_5_3
5th,PAS,Giannina,26,7,3,3,20,12,5,3,5,15,17,50, ,4-4-2,35-29,50,26,12_6_8
2nd,PAS,Giannina,26,20,0,0,99,0,20,0,0,99,0,x, ,4-4-2,198-0,x,26,40_0_0
3rd,PAS,Giannina,26,9
Total,PAS,Giannina,52,17,5,4,50,21,13,6,7,40,31,121, ,4-4-2,45-26,60.5,26,15_5.5_5.5
9th,PAS,Giannina,26,5,4,4,18,16,3,4,6,12,20,41, ,3-5-2,30-36,41,26,8_8_10
Total,PAS,Giannina,26,5,4,4,18,16,3,4,6,12,20,41, ,3-5-2,30-36,41,26,8_8_10
Total,PAS,Giannina,0,0,0,0,0,0,0,0,0,0,0,0, ,5-3-2,NaN-NaN,NaN,NaN,NaN_NaN_NaN
";

    fn rows() -> Vec<StringRecord> {
        assert_ok!(read_dataset(DATASET.as_bytes()))
    }

    #[test]
    fn test_metric_population_std_dev() {
        let m = assert_some!(Metric::of(&[2, 4, 4, 4, 5, 5, 7, 9]));
        assert_eq!(m.min, 2);
        assert_eq!(m.max, 9);
        assert!((m.avg - 5.0).abs() < 1e-12);
        assert!((m.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_metric_empty() {
        assert_none!(Metric::of(&[]));
    }

    #[test]
    fn test_single_row_has_zero_spread() {
        let stats = summarize(&rows());
        let t = stats.iter().find(|s| s.tactic == "3-5-2").unwrap();
        assert_eq!(t.seasons, 1);
        for m in [t.goals, t.conceded, t.goal_difference, t.points].iter() {
            assert_eq!(m.std_dev, 0.0);
            assert_eq!(m.min, m.max);
        }
        assert_eq!(t.goal_difference.avg, -6.0);
    }

    #[test]
    fn test_totals_excluded_and_goals_added_numerically() {
        let stats = summarize(&rows());
        let t = stats.iter().find(|s| s.tactic == "4-4-2").unwrap();
        assert_eq!(t.seasons, 2);
        assert_eq!((t.goals.min, t.goals.max), (35, 55));
        assert_eq!((t.conceded.min, t.conceded.max), (23, 29));
        assert_eq!((t.points.min, t.points.max), (50, 71));
        assert!((t.points.avg - 60.5).abs() < 1e-12);
        assert!((t.points.std_dev - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_short_and_unparsable_rows_skipped() {
        let groups = group_samples(&rows());
        assert_eq!(groups["4-4-2"].len(), 2);
        let stats = summarize(&rows());
        let t = stats.iter().find(|s| s.tactic == "4-4-2").unwrap();
        assert_eq!(t.seasons, 2);
        assert_eq!(t.goals.max, 55);
        assert_eq!(t.conceded.min, 23);
    }

    #[test]
    fn test_tactic_without_real_rows_skipped() {
        let groups = group_samples(&rows());
        assert!(groups["5-3-2"].is_empty());
        let stats = summarize(&rows());
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.tactic != "5-3-2"));
    }

    #[test]
    fn test_record_formatting() {
        let stats = summarize(&rows());
        let t = stats.iter().find(|s| s.tactic == "4-4-2").unwrap();
        assert_eq!(
            t.record().join(","),
            "4-4-2,45.00,26.00,19.00,60.50,71,50,10.50,55,35,10.00,29,23,3.00,32,6,13.00"
        );
        assert_eq!(t.record().len(), HEADER.len());
    }
}
