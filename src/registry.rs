//! Registry trait for fetching package metadata from remote sources

#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;
use crate::metadata::PackageMetadata;

/// Trait for fetching a package document from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the metadata document for a package
    ///
    /// Issues exactly one request per call. Nothing is cached, so calling
    /// this twice with the same name hits the registry twice.
    ///
    /// # Arguments
    /// * `package_name` - The package name, passed to the registry unmodified
    ///
    /// # Returns
    /// * `Ok(PackageMetadata)` - The decoded document
    /// * `Err(FetchError)` - If the request or decoding fails
    async fn fetch_package(&self, package_name: &str) -> Result<PackageMetadata, FetchError>;
}
