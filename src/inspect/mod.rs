//! Artifact introspection abstraction layer
//!
//! Extracting a public API surface and an embedded version from a built
//! artifact is not done by this crate. The [ArtifactInspector] trait is the
//! seam where an introspection backend plugs in.
//!
//! # Implementations
//!
//! - [manifest::ManifestInspector]: reads TOML API-snapshot manifests from disk
//! - [mock::MockInspector]: in-memory snapshots for tests
//!
//! Code that needs artifacts should depend on the trait, not on an implementation.
//!
//! ```rust
//! # use api_semver::inspect::ArtifactInspector;
//! # use std::path::Path;
//! # fn example<I: ArtifactInspector>(inspector: &I) -> api_semver::Result<()> {
//! let snapshot = inspector.load_snapshot(Path::new("build/current.toml"))?;
//! println!("{} public types", snapshot.types.len());
//! # Ok(())
//! # }
//! ```

pub mod manifest;
pub mod mock;

pub use manifest::ManifestInspector;
pub use mock::MockInspector;

use crate::domain::ApiSnapshot;
use crate::error::Result;
use std::path::Path;

/// Introspection collaborator contract
///
/// ## Thread Safety
///
/// Implementors must be `Send + Sync` so independent analyses can run on
/// separate threads against one inspector.
///
/// ## Error Handling
///
/// Failures to read or interpret an artifact are reported as
/// [crate::error::ApiSemverError::Load] and abort the analysis unchanged.
pub trait ArtifactInspector: Send + Sync {
    /// Whether an artifact exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Public API surface of the artifact
    ///
    /// # Returns
    /// * `Ok(ApiSnapshot)` - Types with their base type, interfaces, events, fields and methods
    /// * `Err` - If the artifact is missing or cannot be introspected
    fn load_snapshot(&self, path: &Path) -> Result<ApiSnapshot>;

    /// Raw embedded product version string of the artifact
    ///
    /// The string is returned as found; parsing it is the caller's business.
    /// The version selector only asks for it when the loaded snapshot carries
    /// no version of its own.
    ///
    /// # Returns
    /// * `Ok(String)` - The embedded version
    /// * `Err` - If the artifact is missing or declares no version
    fn read_embedded_version(&self, path: &Path) -> Result<String>;
}
