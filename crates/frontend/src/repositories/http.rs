use super::{DetailRepository, ListRepository, RepositoryError};
use crate::shared::api_utils::{entity_url, get_json};
use async_trait::async_trait;
use serde_json::Value;

/// `GET {url}` and normalize the collection payload.
pub struct HttpListRepository<T> {
    url: String,
    normalize: fn(&Value) -> Vec<T>,
}

impl<T> HttpListRepository<T> {
    pub fn new(url: impl Into<String>, normalize: fn(&Value) -> Vec<T>) -> Self {
        Self {
            url: url.into(),
            normalize,
        }
    }
}

#[async_trait(?Send)]
impl<T: 'static> ListRepository<T> for HttpListRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        let payload = get_json(&self.url).await?;
        Ok((self.normalize)(&payload))
    }
}

/// `GET {url}/{id}`; a 404 answer means the record does not exist.
pub struct HttpDetailRepository<T> {
    url: String,
    map: fn(&Value) -> T,
}

impl<T> HttpDetailRepository<T> {
    pub fn new(url: impl Into<String>, map: fn(&Value) -> T) -> Self {
        Self {
            url: url.into(),
            map,
        }
    }
}

#[async_trait(?Send)]
impl<T: 'static> DetailRepository<T> for HttpDetailRepository<T> {
    async fn get_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        match get_json(&entity_url(&self.url, id)).await {
            Ok(payload) => Ok(Some((self.map)(&payload))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
