//! Resgen - Kotlin resource accessor generator
//!
//! Resgen is a CLI tool and library that turns a multiplatform resource
//! directory tree (drawables, strings, fonts, raw files organized by
//! locale/density/theme qualifier) into compile-time-safe Kotlin accessor
//! declarations, partitioned into bounded-size output files with
//! deterministic naming and ordering.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (scan, parse, collect, validate, partition, emit)
//! - `issue`: Issue type definitions
//! - `report`: Cargo-style issue reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issue;
pub mod report;
