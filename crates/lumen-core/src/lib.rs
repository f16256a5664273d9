//! # lumen-core
//!
//! Core types for the Lumen research catalog.
//!
//! This crate provides the foundational types shared across all Lumen crates:
//! - The `ResearchItem` entity and the read-only `Catalog` that owns them
//! - Closed selector enums (category, date window, sort key)
//! - Month/year publication dates
//! - Cross-cutting error types
//! - The built-in sample catalog

pub mod catalog;
pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
