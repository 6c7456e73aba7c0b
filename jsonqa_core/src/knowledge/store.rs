use std::path::Path;

use tracing::info;

use super::{ContactInfo, FaqEntry, KnowledgeBase, Product};
use crate::error::DataLoadError;

/// Immutable view over a loaded [`KnowledgeBase`].
///
/// All accessors are linear scans in document order and report absence as
/// `None`; none of them can fail once the store exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeStore {
    base: KnowledgeBase,
}

impl KnowledgeStore {
    #[must_use]
    pub const fn new(base: KnowledgeBase) -> Self {
        Self { base }
    }

    /// Read and parse the knowledge base document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base: KnowledgeBase =
            serde_json::from_str(&content).map_err(|source| DataLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            "Loaded knowledge base from {}: {} products, {} FAQ entries",
            path.display(),
            base.products.len(),
            base.faq.len()
        );

        Ok(Self::new(base))
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataLoadError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    #[must_use]
    pub const fn base(&self) -> &KnowledgeBase {
        &self.base
    }

    /// First product whose name contains `fragment`.
    #[must_use]
    pub fn find_product_by_name_fragment(&self, fragment: &str) -> Option<&Product> {
        self.base.products.iter().find(|p| p.name.contains(fragment))
    }

    /// First FAQ entry whose question contains `keyword`.
    #[must_use]
    pub fn find_faq_by_keyword(&self, keyword: &str) -> Option<&FaqEntry> {
        self.base.faq.iter().find(|f| f.question.contains(keyword))
    }

    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.base.company.name.as_deref()
    }

    #[must_use]
    pub fn company_locations(&self) -> Option<&[String]> {
        self.base.company.locations.as_deref()
    }

    /// Contact block, if it carries at least one field.
    #[must_use]
    pub fn contact_info(&self) -> Option<&ContactInfo> {
        self.base
            .company
            .contact_info
            .as_ref()
            .filter(|c| !c.is_empty())
    }

    #[must_use]
    pub fn list_products(&self) -> &[Product] {
        &self.base.products
    }
}
