//! Registry test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use npm_deps::error::FetchError;
use npm_deps::metadata::PackageMetadata;
use npm_deps::registry::Registry;

/// Mock registry that serves canned documents and counts requests
#[derive(Default)]
pub struct MockRegistry {
    documents: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, package: &str, json: &str) -> Self {
        self.documents.insert(package.to_string(), json.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_package(&self, package_name: &str) -> Result<PackageMetadata, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.documents.get(package_name) {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| FetchError::MalformedResponse(e.to_string())),
            None => Err(FetchError::NotFound(package_name.to_string())),
        }
    }
}

/// Build a dependency map from name/range pairs
pub fn dependency_map(entries: &[(&str, &str)]) -> npm_deps::extractor::DependencyMap {
    entries
        .iter()
        .map(|(name, range)| (name.to_string(), range.to_string()))
        .collect()
}
