//! Shared test utilities for the bmad-hooks workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only - never published.
//!
//! # Modules
//!
//! - [`env`] - [`TestEnv`] builder for a project directory plus an isolated
//!   home directory

pub mod env;

pub use env::TestEnv;
