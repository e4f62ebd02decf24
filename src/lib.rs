//! Batch import of delimited player files into SQLite, plus ranking
//! snapshot queries.
//!
//! Every import run stamps one wall-clock tag; all rows inserted by that
//! run share it and together form one "ranking snapshot". The read side
//! lists available tags (newest first) and loads one snapshot ordered by
//! score.

pub mod cli;
pub mod config;
pub mod import;
pub mod player;
pub mod report;
pub mod store;
