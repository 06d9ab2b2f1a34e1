//! Core library for the recon-tools command line application.
//!
//! The library exposes the reconciliation pipeline that joins a spreadsheet
//! export of prospective business records against a snapshot of the
//! authoritative table. The modules are structured to keep responsibilities
//! narrow and composable: IO adapters live under [`io`], data
//! representations inside [`model`], field normalization in [`normalize`],
//! the batch matching and per-row attribution in [`matcher`] and [`report`],
//! the SQL artifact builder in [`sqlgen`], and the run orchestration under
//! [`sync`].

pub mod config;
pub mod error;
pub mod io;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod report;
pub mod sqlgen;
pub mod store;
pub mod sync;

pub use error::{ReconError, Result};
