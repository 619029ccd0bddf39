//! Layout inspection engine
//!
//! This module provides the stage logic of the inspector:
//! - [`engine`]: The [`engine::Inspector`] that runs every stage
//! - [`dump`]: Hex dump and marker line iterators
//! - [`errors`]: The [`errors::InspectorError`] type
//! - [`constants`]: Sentinels, array length and other fixed inputs
//!
//! # Stages
//!
//! ```text
//! SIZE → HEX and PADDING → MEMSET → MEMCPY → STRUCT POINTERS
//! ```
//!
//! Each stage appends a section to the transcript. Stages that change record
//! bytes also capture a [`crate::snapshot::Snapshot`].

pub mod constants;
pub mod dump;
pub mod engine;
pub mod errors;
