//! # Introduction
//!
//! layoutprobe shows what the compiler does to one small `#[repr(C)]` record:
//! how big each member is, how much padding is inserted to align them, where
//! every byte sits in memory, and how the bytes behave under partial clearing,
//! bulk copying and reinterpretation from a heap buffer.
//!
//! ## Pipeline
//!
//! ```text
//! Layout → Sentinels → Hex dump → Partial clear → Copy / Serialize → Transcript
//! ```
//!
//! 1. [`memory`] — the record type, its byte view, the heap buffer and the
//!    byte order probe.
//! 2. [`inspector`] — runs the five stages and records what they observe.
//! 3. [`snapshot`] — the labelled [`snapshot::Transcript`] and per-stage
//!    [`snapshot::Snapshot`]s.
//! 4. [`ui`] — writes the transcript to stdout, coloured on a terminal.
//!
//! ## The record
//!
//! `c: u8`, `counter64: u64`, `s: u16`, `i: u32`, declared in that order. The
//! members add up to 15 bytes; on a typical 64-bit target the record is 24.

pub mod inspector;
pub mod memory;
pub mod snapshot;
pub mod ui;
