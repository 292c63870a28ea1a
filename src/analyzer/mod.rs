//! Version selection from API diffs and version history

pub mod version_selector;

pub use version_selector::{
    change_from_history, create_breaking_change, create_change, create_feature_change,
    next_version, AnalysisResult, VersionSelector,
};
