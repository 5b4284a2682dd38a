//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DomainResult, Entity};

/// Offset window for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Core repository trait for storing entities
///
/// Entities are created from a draft type; the store assigns ids and timestamps.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Input accepted by `create`
    type Draft: Send + Sync;

    /// Store a new entity and return it as persisted
    async fn create(&self, draft: &Self::Draft) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List entities in id order
    async fn list(&self, page: Page) -> DomainResult<Vec<T>>;
}
