//! Temporary source files for tests.

use std::io::Write;

use rust_xlsxwriter::{Workbook, XlsxError};
use tempfile::{Builder, NamedTempFile};

/// A temp file holding `contents`; `suffix` picks the loader (".csv", ".tsv").
pub fn text_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

/// An `.xlsx` temp file built by `fill`.
pub fn workbook_file(fill: impl FnOnce(&mut Workbook) -> Result<(), XlsxError>) -> NamedTempFile {
    let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
    let mut workbook = Workbook::new();
    fill(&mut workbook).unwrap();
    workbook.save(file.path()).unwrap();
    file
}
