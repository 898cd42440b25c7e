//! Direct dependency extraction from a package document
//!
//! Picks the version to inspect and merges its three dependency sections
//! into one [`DependencyMap`].

use indexmap::IndexMap;
use tracing::debug;

use crate::metadata::{PackageMetadata, VersionRecord};

/// Dependency name to version range specifier
///
/// Equality ignores order, so two maps with the same entries compare equal.
pub type DependencyMap = IndexMap<String, String>;

/// Manifest section a dependency is declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// `dependencies`
    Runtime,
    /// `devDependencies`
    Dev,
    /// `peerDependencies`
    Peer,
}

impl DependencyKind {
    /// Order in which sections are merged; later sections win on collision
    pub const MERGE_ORDER: [DependencyKind; 3] = [Self::Runtime, Self::Dev, Self::Peer];

    pub fn section_name(self) -> &'static str {
        match self {
            Self::Runtime => "dependencies",
            Self::Dev => "devDependencies",
            Self::Peer => "peerDependencies",
        }
    }
}

impl VersionRecord {
    pub fn section(&self, kind: DependencyKind) -> &IndexMap<String, String> {
        match kind {
            DependencyKind::Runtime => &self.dependencies,
            DependencyKind::Dev => &self.dev_dependencies,
            DependencyKind::Peer => &self.peer_dependencies,
        }
    }
}

/// Extracts the direct dependencies of the latest version of a package
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyExtractor;

impl DependencyExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Determine which version's manifest to read
    ///
    /// Prefers the `latest` dist-tag. Without one, falls back to the last
    /// entry of `versions` in the order the registry listed them. That is
    /// not necessarily the highest semver version, and it is kept that way
    /// on purpose.
    pub fn select_version<'a>(&self, metadata: &'a PackageMetadata) -> Option<&'a str> {
        if let Some(latest) = metadata.latest_tag() {
            return Some(latest);
        }

        metadata.versions.last().map(|(version, _)| version.as_str())
    }

    /// Merge the dependency sections of the selected version
    ///
    /// Never fails: a missing tag, version record or section yields an
    /// empty or partial map.
    pub fn extract(&self, metadata: &PackageMetadata) -> DependencyMap {
        let mut merged = DependencyMap::new();

        let Some(version) = self.select_version(metadata) else {
            debug!("No versions published, nothing to extract");
            return merged;
        };

        let Some(record) = metadata.versions.get(version) else {
            debug!("Selected version {} has no version record", version);
            return merged;
        };

        debug!("Extracting dependencies of version {}", version);

        for kind in DependencyKind::MERGE_ORDER {
            let section = record.section(kind);
            debug!("Merging {} entries from {}", section.len(), kind.section_name());
            merged.extend(
                section
                    .iter()
                    .map(|(name, range)| (name.clone(), range.clone())),
            );
        }

        merged
    }
}
