//! Presentation: charts and panels drawn from the cleaned data.

pub mod panels;
pub mod plot;
