use super::{DetailRepository, ListRepository, RepositoryError};
use async_trait::async_trait;
use contracts::domain::a001_remito::{fallback_remitos, Remito};

/// Serves the built-in sample remitos.
pub struct MockRemitoRepository;

#[async_trait(?Send)]
impl ListRepository<Remito> for MockRemitoRepository {
    async fn list(&self) -> Result<Vec<Remito>, RepositoryError> {
        Ok(fallback_remitos())
    }
}

/// Fixed in-memory collection.
pub struct StaticListRepository<T> {
    items: Vec<T>,
}

impl<T> StaticListRepository<T> {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

#[async_trait(?Send)]
impl<T: Clone + 'static> ListRepository<T> for StaticListRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.items.clone())
    }
}

/// Knows no records: every lookup is "not found".
pub struct MockDetailRepository;

#[async_trait(?Send)]
impl<T: 'static> DetailRepository<T> for MockDetailRepository {
    async fn get_by_id(&self, _id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(None)
    }
}
