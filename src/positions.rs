//! How often each tactic finished in each table position.

use crate::error::Result;
use crate::table::summary_writer;
use csv::StringRecord;
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

pub const MAX_POSITION: u32 = 14;
//field holding the position label / tactic name in a consolidated row
const POS_FIELD: usize = 0;
const TACTIC_FIELD: usize = 16;
const MIN_FIELDS: usize = 17;

/// "1st" -> 1, "14th" -> 14. Anything that is not a number once the
/// ordinal letters are gone ("Total", blanks) gives `None`.
pub fn parse_position(label: &str) -> Option<u32> {
    label
        .trim()
        .trim_end_matches(|c| matches!(c, 's' | 't' | 'n' | 'd' | 'r' | 'h'))
        .parse::<u32>()
        .ok()
}

pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    std::format!("{}{}", n, suffix)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PositionTable {
    counts: BTreeMap<String, BTreeMap<u32, u32>>,
}

impl PositionTable {
    pub fn from_rows(rows: &[StringRecord]) -> PositionTable {
        let mut table = PositionTable::default();
        for row in rows {
            if row.len() <= MIN_FIELDS {
                debug!("position count: skipping short row {:?}", row);
                continue;
            }
            let position = match parse_position(&row[POS_FIELD]) {
                Some(p) => p,
                None => continue,
            };
            table.record(row[TACTIC_FIELD].trim(), position);
        }
        table
    }

    pub fn record(&mut self, tactic: &str, position: u32) {
        *self
            .counts
            .entry(tactic.to_string())
            .or_insert_with(BTreeMap::new)
            .entry(position)
            .or_insert(0) += 1;
    }

    pub fn count(&self, tactic: &str, position: u32) -> u32 {
        self.counts
            .get(tactic)
            .and_then(|by_pos| by_pos.get(&position))
            .copied()
            .unwrap_or(0)
    }

    pub fn tactics(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|k| k.as_str())
    }

    pub fn header() -> Vec<String> {
        let mut h = vec!["Tactic Name".to_string()];
        h.extend((1..=MAX_POSITION).map(ordinal));
        h
    }

    /// One line per tactic, positions 1..=14, zero where never reached.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.tactics()
            .map(|tactic| {
                let mut row = vec![tactic.to_string()];
                row.extend((1..=MAX_POSITION).map(|p| self.count(tactic, p).to_string()));
                row
            })
            .collect()
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = summary_writer(path)?;
        out.write_record(&PositionTable::header())?;
        for row in self.rows() {
            out.write_record(&row)?;
        }
        out.flush().map_err(crate::error::io_at(path))?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::table::read_dataset;
    use claim::{assert_none, assert_ok, assert_some_eq};

    const DATASET: &str = "\
Pos,Team, ,Pld,Won,Drn,Lst,For,Ag,Won,Drn,Lst,For,Ag,Pts, ,tactic_name,scored-conceded,points,games,wins_draws_losses
1st,PAS,Giannina,26,10,2,1,30,9,8,3,2,25,14,71, ,4-4-2,55-23,71,26,18_5_3
3rd,PAS,Giannina,26,9,2,2,28,12,6,4,3,20,15,60, ,4-4-2,48-27,60,26,15_6_5
1st,PAS,Giannina,26,11,1,1,33,8,7,4,2,22,13,71, ,4-4-2,55-21,71,26,18_5_3
Total,PAS,Giannina,78,30,5,4,91,29,21,11,7,67,42,202, ,4-4-2,52.666666666666664-23.666666666666668,67.33333333333333,26,17_5.333333333333333_3.6666666666666665
14th,PAS,Giannina,26,2,3,8,12,25,1,2,10,9,30,14, , 3-5-2 ,21-55,14,26,3_5_18
Total,PAS,Giannina,26,2,3,8,12,25,1,2,10,9,30,14, ,3-5-2,21-55,14,26,3_5_18
15th,PAS,Giannina,26,1,3,9,10,28,1,2,10,8,31,11, ,3-5-2,18-59,11,26,2_5_19
xx,PAS,Giannina,26,2,3,8,12,25,1,2,10,9,30,14, ,3-5-2,21-55,14,26,3_5_18
2nd,too,short
";

    fn table() -> PositionTable {
        let rows = assert_ok!(read_dataset(DATASET.as_bytes()));
        PositionTable::from_rows(&rows)
    }

    #[test]
    fn test_parse_position() {
        assert_some_eq!(parse_position("1st"), 1);
        assert_some_eq!(parse_position("2nd"), 2);
        assert_some_eq!(parse_position("3rd"), 3);
        assert_some_eq!(parse_position(" 14th "), 14);
        assert_none!(parse_position("Total"));
        assert_none!(parse_position(""));
        assert_none!(parse_position("xx"));
    }

    #[test]
    fn test_ordinals() {
        let h = PositionTable::header();
        assert_eq!(h.len(), 15);
        assert_eq!(&h[..5], &["Tactic Name", "1st", "2nd", "3rd", "4th"]);
        assert_eq!(h[11], "11th");
        assert_eq!(h[14], "14th");
    }

    #[test]
    fn test_counts_exclude_totals_and_junk() {
        let t = table();
        assert_eq!(t.tactics().collect::<Vec<_>>(), vec!["3-5-2", "4-4-2"]);
        assert_eq!(t.count("4-4-2", 1), 2);
        assert_eq!(t.count("4-4-2", 3), 1);
        assert_eq!(t.count("4-4-2", 2), 0);
        assert_eq!(t.count("3-5-2", 14), 1);
    }

    #[test]
    fn test_count_sum_matches_real_rows() {
        let t = table();
        let sum: u32 = (1..=MAX_POSITION).map(|p| t.count("4-4-2", p)).sum();
        assert_eq!(sum, 3);
    }

    #[test]
    fn test_position_past_14th_counted_not_written() {
        let t = table();
        assert_eq!(t.count("3-5-2", 15), 1);
        let rows = t.rows();
        assert!(rows.iter().all(|r| r.len() == 15));
        assert_eq!(rows[0][14], "1");
    }

    #[test]
    fn test_rows_zero_filled() {
        let rows = table().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec!["3-5-2", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "1"]
        );
        assert_eq!(rows[1][..4], ["4-4-2", "2", "0", "1"]);
    }
}
