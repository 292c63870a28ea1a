//! User interface module - terminal output of version decisions.
//!
//! - `formatter` - Text building and printing

pub mod formatter;

pub use formatter::{
    display_analysis, display_boundary_warning, display_error, display_version,
    format_diff_summary,
};
