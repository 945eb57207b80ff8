use super::coerce::coerce_all;
use super::model::RawTable;
use super::schema::{TableSchema, DEPTH_1, DEPTH_2, TEMPERATURE_1, TEMPERATURE_2};

// ---------------------------------------------------------------------------
// ProfileRecord – one depth/temperature reading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileRecord {
    /// Metres below the surface.
    pub depth: f64,
    /// Degrees Celsius.
    pub temperature: f64,
}

/// The two vertical profiles read side by side from one table.
///
/// Each profile is cleaned on its own: a row dropped from one is not dropped
/// from the other, so equal indices need not share a depth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePair {
    pub first: Vec<ProfileRecord>,
    pub second: Vec<ProfileRecord>,
}

/// Extract one profile from the named depth and temperature columns, keeping
/// source order and dropping rows where either value fails to coerce.
pub fn clean_profile(
    table: &RawTable,
    schema: &TableSchema,
    depth_col: &str,
    temperature_col: &str,
) -> Vec<ProfileRecord> {
    schema
        .data_rows(table)
        .enumerate()
        .filter_map(|(i, row)| {
            let depth = schema.get(row, depth_col);
            let temperature = schema.get(row, temperature_col);
            match coerce_all([depth, temperature]) {
                Some([depth, temperature]) => Some(ProfileRecord { depth, temperature }),
                None => {
                    log::debug!(
                        "{}: dropping row {} ({depth_col}={depth:?}, {temperature_col}={temperature:?})",
                        schema.name,
                        i + schema.skip_rows
                    );
                    None
                }
            }
        })
        .collect()
}

/// Clean both profiles of a profiles table.
pub fn clean_profiles(table: &RawTable, schema: &TableSchema) -> ProfilePair {
    ProfilePair {
        first: clean_profile(table, schema, DEPTH_1, TEMPERATURE_1),
        second: clean_profile(table, schema, DEPTH_2, TEMPERATURE_2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Cell;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from(*s)).collect()
    }

    fn rec(depth: f64, temperature: f64) -> ProfileRecord {
        ProfileRecord { depth, temperature }
    }

    #[test]
    fn two_headers_then_two_profiles() {
        let table = RawTable::new(vec![
            row(&["Profile 1", "", "", "Profile 2", ""]),
            row(&["Depth (m)", "Temp (C)", "", "Depth (m)", "Temp (C)"]),
            row(&["10", "5.0", "", "10", "6.0"]),
            row(&["20", "4.5", "", "20", "5.5"]),
        ]);
        let pair = clean_profiles(&table, &TableSchema::profiles());
        assert_eq!(pair.first, vec![rec(10.0, 5.0), rec(20.0, 4.5)]);
        assert_eq!(pair.second, vec![rec(10.0, 6.0), rec(20.0, 5.5)]);
    }

    #[test]
    fn profiles_drop_rows_independently() {
        let table = RawTable::new(vec![
            row(&["h"]),
            row(&["h"]),
            row(&["10", "--", "", "10", "6.0"]),
            row(&["20", "4.5", "", "", "5.5"]),
            row(&["30", "4.1", "", "30", "5.1"]),
        ]);
        let pair = clean_profiles(&table, &TableSchema::profiles());
        assert_eq!(pair.first, vec![rec(20.0, 4.5), rec(30.0, 4.1)]);
        assert_eq!(pair.second, vec![rec(10.0, 6.0), rec(30.0, 5.1)]);
    }

    #[test]
    fn short_rows_only_affect_missing_columns() {
        let table = RawTable::new(vec![
            row(&["h"]),
            row(&["h"]),
            row(&["50", "3.9"]),
        ]);
        let pair = clean_profiles(&table, &TableSchema::profiles());
        assert_eq!(pair.first, vec![rec(50.0, 3.9)]);
        assert!(pair.second.is_empty());
    }

    #[test]
    fn output_never_exceeds_data_rows() {
        let mut rows = vec![row(&["h"]), row(&["h"])];
        for i in 0..25 {
            let depth = (i * 10).to_string();
            let temp = if i % 3 == 0 { "x".to_string() } else { format!("{}.5", 20 - i) };
            rows.push(row(&[&depth, &temp, "", &depth, "7"]));
        }
        let table = RawTable::new(rows);
        let pair = clean_profiles(&table, &TableSchema::profiles());
        assert!(pair.first.len() <= table.len() - 2);
        assert!(pair.second.len() <= table.len() - 2);
        assert!(pair
            .first
            .iter()
            .chain(&pair.second)
            .all(|r| r.depth.is_finite() && r.temperature.is_finite()));
    }

    #[test]
    fn header_only_table_yields_nothing() {
        let table = RawTable::new(vec![row(&["h"])]);
        assert_eq!(clean_profiles(&table, &TableSchema::profiles()), ProfilePair::default());
    }
}
