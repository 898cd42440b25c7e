//! Package documents returned by the npm registry
//!
//! Decoding is lenient below the top level: old versions in the registry
//! carry manifests of every shape, and only the selected one is ever read.
//! A section that is not an object decodes as empty instead of failing the
//! whole document.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Decoded registry document for a single package
///
/// `versions` keeps the order in which the registry listed them, which is
/// what the "no latest tag" fallback relies on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageMetadata {
    #[serde(rename = "dist-tags", default, deserialize_with = "lenient_dist_tags")]
    pub dist_tags: HashMap<String, String>,
    #[serde(default, deserialize_with = "lenient_versions")]
    pub versions: IndexMap<String, VersionRecord>,
}

impl PackageMetadata {
    /// Returns the `latest` dist-tag, treating an empty string as absent
    pub fn latest_tag(&self) -> Option<&str> {
        self.dist_tags
            .get("latest")
            .map(String::as_str)
            .filter(|version| !version.is_empty())
    }
}

/// Dependency sections of one published version's manifest
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    #[serde(default, deserialize_with = "lenient_section")]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub dev_dependencies: IndexMap<String, String>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub peer_dependencies: IndexMap<String, String>,
}

/// A value that is kept when it has the expected shape and dropped otherwise
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Parsed(T),
    Ignored(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Ignored(_) => None,
        }
    }
}

/// A range specifier; non-string values keep their JSON text
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeSpec {
    Text(String),
    Other(serde_json::Value),
}

impl From<RangeSpec> for String {
    fn from(spec: RangeSpec) -> Self {
        match spec {
            RangeSpec::Text(text) => text,
            RangeSpec::Other(value) => value.to_string(),
        }
    }
}

fn lenient_dist_tags<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Lenient::<HashMap<String, Lenient<String>>>::deserialize(deserializer)?;

    Ok(tags
        .into_option()
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(tag, version)| version.into_option().map(|version| (tag, version)))
        .collect())
}

fn lenient_versions<'de, D>(deserializer: D) -> Result<IndexMap<String, VersionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let versions = Lenient::<IndexMap<String, Lenient<VersionRecord>>>::deserialize(deserializer)?;

    Ok(versions
        .into_option()
        .unwrap_or_default()
        .into_iter()
        .map(|(version, record)| (version, record.into_option().unwrap_or_default()))
        .collect())
}

fn lenient_section<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let section = Lenient::<IndexMap<String, RangeSpec>>::deserialize(deserializer)?;

    Ok(section
        .into_option()
        .unwrap_or_default()
        .into_iter()
        .map(|(name, range)| (name, range.into()))
        .collect())
}
