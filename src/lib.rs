//! autostock: one themed stock-image asset per run.
//!
//! The pipeline sweeps the previous run's output, asks a text model for a
//! creative prompt, renders an image from it, derives submission metadata,
//! then renames the file and writes a single-row CSV record.

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(warnings)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod finalize;
pub mod metadata;
pub mod pipeline;
pub mod prompt;
pub mod sanitize;
pub mod service;
pub mod sweep;
pub mod synth;

#[cfg(test)]
mod testutil;
