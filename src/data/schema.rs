use super::coerce::coerce_numeric;
use super::error::PipelineError;
use super::model::{Cell, RawTable};

// ---------------------------------------------------------------------------
// Schema descriptor
// ---------------------------------------------------------------------------

/// One named column at a fixed position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub index: usize,
}

/// Describes where the data lives in a [`RawTable`]: how many leading rows are
/// headers and which positions hold which named columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub skip_rows: usize,
    pub columns: Vec<ColumnSpec>,
}

pub const DEPTH_1: &str = "depth_1";
pub const TEMPERATURE_1: &str = "temperature_1";
pub const DEPTH_2: &str = "depth_2";
pub const TEMPERATURE_2: &str = "temperature_2";
pub const DAY_OFFSET: &str = "day_offset";
pub const TEMPERATURE: &str = "temperature";

impl TableSchema {
    /// Two profile column pairs after two header rows; column 2 is unused.
    pub fn profiles() -> Self {
        TableSchema {
            name: "temperature profiles",
            skip_rows: 2,
            columns: vec![
                ColumnSpec { name: DEPTH_1, index: 0 },
                ColumnSpec { name: TEMPERATURE_1, index: 1 },
                ColumnSpec { name: DEPTH_2, index: 3 },
                ColumnSpec { name: TEMPERATURE_2, index: 4 },
            ],
        }
    }

    /// Day offset and temperature, no header rows.
    pub fn sst() -> Self {
        TableSchema {
            name: "sea-surface temperature",
            skip_rows: 0,
            columns: vec![
                ColumnSpec { name: DAY_OFFSET, index: 0 },
                ColumnSpec { name: TEMPERATURE, index: 1 },
            ],
        }
    }

    /// Minimum table width this schema can be read from.
    pub fn required_width(&self) -> usize {
        self.columns.iter().map(|c| c.index + 1).max().unwrap_or(0)
    }

    /// Position of a named column. Unknown names are a programming error in
    /// the caller, so they resolve to `None` rather than a pipeline error.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.index)
    }

    /// Reject tables too narrow to hold every declared column.
    pub fn validate(&self, table: &RawTable) -> Result<(), PipelineError> {
        let required = self.required_width();
        let found = table.width();
        if found < required {
            let columns = self
                .columns
                .iter()
                .map(|c| format!("{}@{}", c.name, c.index))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(PipelineError::SchemaTooNarrow {
                table: self.name.to_string(),
                required,
                found,
                columns,
            });
        }
        Ok(())
    }

    /// Data rows only: the table minus the header rows.
    pub fn data_rows<'a>(&self, table: &'a RawTable) -> impl Iterator<Item = &'a [Cell]> + 'a {
        table.rows.iter().skip(self.skip_rows).map(Vec::as_slice)
    }

    /// Cell of a named column in a data row; missing trailing cells read as empty.
    pub fn get<'a>(&self, row: &'a [Cell], name: &str) -> &'a Cell {
        static EMPTY: Cell = Cell::Empty;
        self.index_of(name)
            .and_then(|i| row.get(i))
            .unwrap_or(&EMPTY)
    }

    /// Fail with [`PipelineError::AllValuesUnparseable`] when not a single data
    /// cell of any declared column coerces to a number.
    pub fn require_parseable(&self, table: &RawTable) -> Result<(), PipelineError> {
        for column in &self.columns {
            let any = self
                .data_rows(table)
                .any(|row| coerce_numeric(self.get(row, column.name)).is_some());
            if !any {
                return Err(PipelineError::AllValuesUnparseable {
                    table: self.name.to_string(),
                    column: column.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from(*s)).collect()
    }

    #[test]
    fn required_width_follows_highest_index() {
        assert_eq!(TableSchema::profiles().required_width(), 5);
        assert_eq!(TableSchema::sst().required_width(), 2);
    }

    #[test]
    fn narrow_table_is_rejected() {
        let table = RawTable::new(vec![row(&["1", "2", "3"])]);
        let err = TableSchema::profiles().validate(&table).unwrap_err();
        match err {
            PipelineError::SchemaTooNarrow { required, found, columns, .. } => {
                assert_eq!(required, 5);
                assert_eq!(found, 3);
                assert!(columns.contains("temperature_2@4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_table_is_too_narrow() {
        let err = TableSchema::sst().validate(&RawTable::default()).unwrap_err();
        assert_eq!(err.kind(), "schema too narrow");
    }

    #[test]
    fn ragged_table_uses_widest_row() {
        let table = RawTable::new(vec![row(&["0"]), row(&["1", "18.0"])]);
        assert!(TableSchema::sst().validate(&table).is_ok());
    }

    #[test]
    fn header_rows_are_skipped() {
        let table = RawTable::new(vec![
            row(&["Depth", "Temp", "", "Depth", "Temp"]),
            row(&["m", "C", "", "m", "C"]),
            row(&["10", "5.0", "", "10", "6.0"]),
        ]);
        let schema = TableSchema::profiles();
        let rows: Vec<_> = schema.data_rows(&table).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(schema.get(rows[0], TEMPERATURE_2), &Cell::from("6.0"));
    }

    #[test]
    fn unparseable_column_is_named() {
        let table = RawTable::new(vec![row(&["0", "warm"]), row(&["1", "cold"])]);
        let err = TableSchema::sst().require_parseable(&table).unwrap_err();
        assert_eq!(
            err,
            PipelineError::AllValuesUnparseable {
                table: "sea-surface temperature".to_string(),
                column: TEMPERATURE.to_string(),
            }
        );
    }

    #[test]
    fn one_parseable_cell_is_enough() {
        let table = RawTable::new(vec![row(&["0", "--"]), row(&["1", "17.9"])]);
        assert!(TableSchema::sst().require_parseable(&table).is_ok());
    }
}
