pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod diff;
pub mod domain;
pub mod error;
pub mod git;
pub mod inspect;
pub mod rules;
pub mod sources;
pub mod ui;

pub use analyzer::{AnalysisResult, VersionSelector};
pub use error::{ApiSemverError, Result};
