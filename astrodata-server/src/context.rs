use std::sync::Arc;

use chrono::{
    DateTime,
    Utc,
};
use tokio::sync::{
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard,
};

use crate::catalog::Catalog;

#[derive(Clone)]
pub struct Context {
    pub up_since: DateTime<Utc>,
    catalog: Arc<RwLock<Catalog>>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            up_since: Utc::now(),
            catalog: Arc::new(RwLock::new(Catalog::default())),
        }
    }

    pub async fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    pub async fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().await
    }
}
