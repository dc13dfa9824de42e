//! One season directory worth of rows: derived columns per row, plus the
//! synthetic Total row carrying column sums and per-season averages.

use crate::error::{BenchError, Result};
use itertools::Itertools;

/// Title row shared by the season tables and the consolidated file.
pub const HEADER: &str = "Pos,Team, ,Pld,Won,Drn,Lst,For,Ag,Won,Drn,Lst,For,Ag,Pts, ,tactic_name,scored-conceded,points,games,wins_draws_losses";

/// Placeholder column between the table fields and the derived ones.
pub const BLANK: &str = " ";

//column of the first and last integer in a normalized row
const FIRST_NUMERIC: usize = 3;
const LAST_NUMERIC: usize = 14;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub matches: i64,
    pub home_wins: i64,
    pub home_draws: i64,
    pub home_losses: i64,
    pub home_for: i64,
    pub home_against: i64,
    pub away_wins: i64,
    pub away_draws: i64,
    pub away_losses: i64,
    pub away_for: i64,
    pub away_against: i64,
    pub points: i64,
}

impl Tally {
    /// Reads columns 3..=14. On failure returns the bad column and its text.
    pub fn from_fields(fields: &[&str]) -> std::result::Result<Tally, (usize, String)> {
        let mut v = [0i64; LAST_NUMERIC - FIRST_NUMERIC + 1];
        for (slot, column) in v.iter_mut().zip(FIRST_NUMERIC..=LAST_NUMERIC) {
            let raw = fields.get(column).copied().unwrap_or("");
            *slot = raw.trim().parse::<i64>().map_err(|_| (column, raw.to_string()))?;
        }
        Ok(Tally {
            matches: v[0],
            home_wins: v[1],
            home_draws: v[2],
            home_losses: v[3],
            home_for: v[4],
            home_against: v[5],
            away_wins: v[6],
            away_draws: v[7],
            away_losses: v[8],
            away_for: v[9],
            away_against: v[10],
            points: v[11],
        })
    }

    pub fn columns(&self) -> [i64; 12] {
        [
            self.matches,
            self.home_wins,
            self.home_draws,
            self.home_losses,
            self.home_for,
            self.home_against,
            self.away_wins,
            self.away_draws,
            self.away_losses,
            self.away_for,
            self.away_against,
            self.points,
        ]
    }

    pub fn goals_for(&self) -> i64 {
        self.home_for + self.away_for
    }
    pub fn goals_against(&self) -> i64 {
        self.home_against + self.away_against
    }
    pub fn wins(&self) -> i64 {
        self.home_wins + self.away_wins
    }
    pub fn draws(&self) -> i64 {
        self.home_draws + self.away_draws
    }
    pub fn losses(&self) -> i64 {
        self.home_losses + self.away_losses
    }
}

impl Tally {
    /// Column-wise sum, `None` once any column or any home+away pair no
    /// longer fits an `i64`.
    pub fn checked_add(&self, o: &Tally) -> Option<Tally> {
        let sum = Tally {
            matches: self.matches.checked_add(o.matches)?,
            home_wins: self.home_wins.checked_add(o.home_wins)?,
            home_draws: self.home_draws.checked_add(o.home_draws)?,
            home_losses: self.home_losses.checked_add(o.home_losses)?,
            home_for: self.home_for.checked_add(o.home_for)?,
            home_against: self.home_against.checked_add(o.home_against)?,
            away_wins: self.away_wins.checked_add(o.away_wins)?,
            away_draws: self.away_draws.checked_add(o.away_draws)?,
            away_losses: self.away_losses.checked_add(o.away_losses)?,
            away_for: self.away_for.checked_add(o.away_for)?,
            away_against: self.away_against.checked_add(o.away_against)?,
            points: self.points.checked_add(o.points)?,
        };
        if sum.pairs_fit() {
            Some(sum)
        } else {
            None
        }
    }

    //goals_for() and friends add home and away columns
    fn pairs_fit(&self) -> bool {
        self.home_for.checked_add(self.away_for).is_some()
            && self.home_against.checked_add(self.away_against).is_some()
            && self.home_wins.checked_add(self.away_wins).is_some()
            && self.home_draws.checked_add(self.away_draws).is_some()
            && self.home_losses.checked_add(self.away_losses).is_some()
    }
}

/// `sum / count`, or `None` when there is nothing to divide by.
pub fn average(sum: i64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Shortest round-trip rendering; an undefined average prints as `NaN`.
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) => std::format!("{}", v),
        None => "NaN".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Averages {
    pub goals_for: Option<f64>,
    pub goals_against: Option<f64>,
    pub points: Option<f64>,
    pub matches: Option<f64>,
    pub wins: Option<f64>,
    pub draws: Option<f64>,
    pub losses: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow {
    /// The normalized row exactly as extracted.
    pub raw: String,
    pub tally: Tally,
    pub points_text: String,
    pub matches_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub tactic: String,
    pub rows: Vec<DerivedRow>,
    pub total: Tally,
}

impl Season {
    /// Parse every extracted row of one season. Any bad integer aborts the
    /// whole season.
    pub fn aggregate(tactic: &str, rows: &[String]) -> Result<Season> {
        let mut total = Tally::default();
        let mut derived = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let fields: Vec<&str> = row.split(',').collect();
            let tally = Tally::from_fields(&fields).map_err(|(column, value)| BenchError::Parse {
                season: tactic.to_string(),
                line: idx + 1,
                column,
                value,
            })?;
            total = Some(tally)
                .filter(Tally::pairs_fit)
                .and_then(|t| total.checked_add(&t))
                .ok_or_else(|| BenchError::Overflow {
                    season: tactic.to_string(),
                    line: idx + 1,
                })?;
            derived.push(DerivedRow {
                raw: row.clone(),
                tally,
                points_text: fields[LAST_NUMERIC].to_string(),
                matches_text: fields[FIRST_NUMERIC].to_string(),
            });
        }
        Ok(Season {
            tactic: tactic.to_string(),
            rows: derived,
            total,
        })
    }

    pub fn season_count(&self) -> usize {
        self.rows.len()
    }

    pub fn averages(&self) -> Averages {
        let n = self.season_count();
        let t = &self.total;
        Averages {
            goals_for: average(t.goals_for(), n),
            goals_against: average(t.goals_against(), n),
            points: average(t.points, n),
            matches: average(t.matches, n),
            wins: average(t.wins(), n),
            draws: average(t.draws(), n),
            losses: average(t.losses(), n),
        }
    }

    fn derived_line(&self, row: &DerivedRow) -> String {
        let t = &row.tally;
        std::format!(
            "{},{},{},{}-{},{},{},{}_{}_{}",
            row.raw,
            BLANK,
            self.tactic,
            t.goals_for(),
            t.goals_against(),
            row.points_text,
            row.matches_text,
            t.wins(),
            t.draws(),
            t.losses()
        )
    }

    pub fn total_line(&self) -> String {
        let sums = self.total.columns().iter().join(",");
        let a = self.averages();
        std::format!(
            "Total,PAS,Giannina,{},{},{},{}-{},{},{},{}_{}_{}",
            sums,
            BLANK,
            self.tactic,
            format_average(a.goals_for),
            format_average(a.goals_against),
            format_average(a.points),
            format_average(a.matches),
            format_average(a.wins),
            format_average(a.draws),
            format_average(a.losses)
        )
    }

    /// Header, one line per row in extraction order, Total last.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(HEADER.to_string());
        for row in self.rows.iter() {
            out.push(self.derived_line(row));
        }
        out.push(self.total_line());
        out
    }
}
