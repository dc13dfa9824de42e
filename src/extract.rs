use crate::config::{MARKER_TOKENS, TEAM_MARKER};

/// Normalize one table row: every run of spaces/tabs becomes a single
/// separator, qualifier tokens go, the rest is joined with commas.
pub fn normalize_line(line: &str) -> String {
    line.replace(' ', "\t")
        .split('\t')
        //runs of separators and leading/trailing padding give empty fields
        .filter(|field| !field.is_empty())
        .filter(|field| !MARKER_TOKENS.contains(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// All rows of the tracked team, in dump order. No match is not an error.
pub fn extract_rows(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.contains(TEAM_MARKER))
        .map(normalize_line)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_documented_row() {
        let row = normalize_line("1st PAS Giannina C 10 5 R 2 3 20 8 4 3 1 12 5 35");
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(
            fields,
            vec!["1st", "PAS", "Giannina", "10", "5", "2", "3", "20", "8", "4", "3", "1", "12", "5", "35"]
        );
        assert_eq!(fields.len(), 15);
    }

    #[test]
    fn test_padding_and_tabs_collapse() {
        let row = normalize_line("  3rd\tPAS   Giannina  C 26\t\t8 3 2 22 10 R 6 4 3 18 15 52  ");
        assert_eq!(row, "3rd,PAS,Giannina,26,8,3,2,22,10,6,4,3,18,15,52");
    }

    #[test]
    fn test_marker_only_dropped_as_whole_field() {
        //"Cr" and "RC" are not qualifiers
        assert_eq!(normalize_line("Cr C R RC"), "Cr,RC");
    }

    #[test]
    fn test_filters_other_teams() {
        let dump = "\
Benchmark results
 1st  PAS Giannina  C 26 10 2 1 30 9 R 8 3 2 25 14 71
 2nd  Panathinaikos    26 9 3 1 28 10   8 2 3 20 12 65
 9th  PAS Giannina  C 26 5 4 4 18 16 R 3 4 6 12 20 41
";
        let rows = extract_rows(dump);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("1st,PAS,Giannina,26"));
        assert!(rows[1].starts_with("9th,PAS,Giannina,26"));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(extract_rows("1st pas giannina 26 1 1 1 1 1 1 1 1 1 1 1").is_empty());
        assert!(extract_rows("").is_empty());
    }
}
