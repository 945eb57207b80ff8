//! Data layer: raw tables, cleaning, and derived series.
//!
//! Architecture:
//! ```text
//!  .xlsx / .ods / .csv / .tsv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → RawTable (untyped cells)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  schema   │  width check, header skip, named columns
//!   └──────────┘
//!        │
//!        ├──────────────────┐
//!        ▼                  ▼
//!   ┌──────────┐       ┌──────────┐
//!   │ profile   │       │   sst     │  coerce → drop → date + season
//!   └──────────┘       └──────────┘
//! ```
//!
//! `pipeline` strings the stages together; each run fails on its own.

pub mod coerce;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod profile;
pub mod schema;
pub mod sst;
