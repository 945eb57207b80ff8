use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use super::error::PipelineError;
use super::model::{Cell, RawTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a raw table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.xlsb` / `.ods` – first worksheet
/// * `.csv` / `.tsv` / `.txt` / `.dat` – delimited text, no header row assumed
///
/// Any failure is reported as [`PipelineError::SourceUnreadable`].
pub fn load_table(path: &Path) -> Result<RawTable, PipelineError> {
    read_table(path).map_err(|e| PipelineError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

fn read_table(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => load_workbook(path),
        "tsv" => load_delimited(path, Some(b'\t')),
        "csv" | "txt" | "dat" => load_delimited(path, None),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// Read every row of the first worksheet, keeping cells untyped. Positions
/// are relative to A1: calamine trims leading blank rows and columns from the
/// range, so they are padded back in.
fn load_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).context("opening workbook")?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("workbook has no worksheets")?;
    let range = workbook
        .worksheet_range(&sheet)
        .with_context(|| format!("reading worksheet '{sheet}'"))?;

    let (first_row, first_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); first_row as usize];
    rows.extend(range.rows().map(|row| {
        std::iter::repeat(Cell::Empty)
            .take(first_col as usize)
            .chain(row.iter().map(workbook_cell))
            .collect()
    }));

    Ok(RawTable::new(rows))
}

fn workbook_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::from(s.as_str()),
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Delimited-text loader
// ---------------------------------------------------------------------------

/// Read a delimited file without assuming a header row. Rows may have
/// differing widths.
fn load_delimited(path: &Path, delimiter: Option<u8>) -> Result<RawTable> {
    let bytes = std::fs::read(path).context("reading file")?;
    let text = decode_text(&bytes);
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(&text));
    parse_delimited(&text, delimiter)
}

fn parse_delimited(text: &str, delimiter: u8) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {row_no}"))?;
        rows.push(record.iter().map(|field| Cell::from(field.trim())).collect());
    }

    Ok(RawTable::new(rows))
}

/// UTF-8 with an optional BOM, falling back to Latin-1 for legacy exports.
fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            log::debug!("source is not valid UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Pick the most frequent of `,` `;` `\t` on the first non-empty line.
fn sniff_delimiter(text: &str) -> u8 {
    let first = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    [b',', b';', b'\t']
        .into_iter()
        .map(|d| (d, first.bytes().filter(|&b| b == d).count()))
        .filter(|&(_, n)| n > 0)
        .max_by_key(|&(_, n)| n)
        .map(|(d, _)| d)
        .unwrap_or(b',')
}
