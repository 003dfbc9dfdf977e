//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and provides settings loading
//! plus the error-context helpers every error enum in the workspace uses.
//!
//! ## Settings loading
//! ```rust,no_run
//! use dfh_kernel::config::load_config;
//! use dfh_kernel::domain::config::LoaderConfig;
//!
//! let cfg: LoaderConfig = load_config(None::<&str>).unwrap_or_default();
//! ```

pub mod config;
pub mod error;

pub use dfh_domain as domain;
