//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `serde_json`).
//! Keep it lean: no I/O or heavy logic, just data, defaults and simple helpers.

pub mod config;
pub mod item;
pub mod metadata;
