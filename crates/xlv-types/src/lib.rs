//! Foundation types for XRPL Ledger View (XLV).
//!
//! This crate provides the output data model and the display configuration
//! shared by every other XLV crate.
//!
//! # Key Types
//!
//! - [`SectionTree`] / [`Section`] / [`ContentItem`]: Structured report output
//! - [`DisplayConfig`]: Explicit timezone, time format, and traversal limits
//! - [`DisplayZone`]: Fixed UTC offset plus the abbreviation shown after times

pub mod config;
pub mod error;
pub mod section;

pub use config::{DisplayConfig, DisplayZone};
pub use error::TypeError;
pub use section::{ContentItem, Section, SectionTree};
