//! Direct dependency lookup for npm packages
//!
//! Fetches a package document from the npm registry and merges the
//! `dependencies`, `devDependencies` and `peerDependencies` of its latest
//! version into a single map.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Analyzer   │────▶│  Registry   │────▶│  Extractor  │
//! │ (name check)│     │ (HTTP GET)  │     │ (merge deps)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`analyzer`]: Entry point wiring a registry to the extractor
//! - [`registry`]: Registry trait for fetching package metadata
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`extractor`]: Version selection and dependency merging
//! - [`metadata`]: Decoded registry documents
//! - [`error`]: Error types for fetching and analysis
//! - [`config`]: `config.json` loading for the command line tool
//! - [`report`]: Text rendering of configuration and results
//! - [`logging`]: tracing subscriber setup for the command line tool

pub mod analyzer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod metadata;
pub mod registries;
pub mod registry;
pub mod report;
