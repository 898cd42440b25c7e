//! Dependency analysis entry point
//!
//! Wires a [`Registry`] to the [`DependencyExtractor`] for one package.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::extractor::{DependencyExtractor, DependencyMap};
use crate::registry::Registry;

/// Fetches a package and extracts its direct dependencies
pub struct DependencyAnalyzer {
    registry: Arc<dyn Registry>,
    extractor: DependencyExtractor,
}

impl DependencyAnalyzer {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            extractor: DependencyExtractor::new(),
        }
    }

    /// Analyze the direct dependencies of `package_name`
    ///
    /// An empty name fails before any request is made. Fetch failures are
    /// returned as-is inside [`AnalysisError::FetchFailed`].
    pub async fn analyze(&self, package_name: &str) -> Result<DependencyMap, AnalysisError> {
        if package_name.is_empty() {
            return Err(AnalysisError::MissingPackageName);
        }

        info!("Analyzing dependencies of {}", package_name);

        let metadata = self.registry.fetch_package(package_name).await?;
        let dependencies = self.extractor.extract(&metadata);

        debug!(
            "Found {} direct dependencies for {}",
            dependencies.len(),
            package_name
        );

        Ok(dependencies)
    }
}
