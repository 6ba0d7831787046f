//! Core generation pipeline.
//!
//! Data flow: `scan` walks each resource root, `qualifier` parses every
//! file path, `collect` aggregates parsed files into the catalog,
//! `validate` gates it, `partition` splits it into bounded groups, and
//! `emit`/`write` render and persist one file per group.

pub mod collect;
pub mod emit;
pub mod model;
pub mod partition;
pub mod qualifier;
pub mod sanitize;
pub mod scan;
pub mod validate;
pub mod write;
