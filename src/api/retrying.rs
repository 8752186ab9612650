// src/api/retrying.rs
//! Retry layer over any [`NotionRepository`].
//!
//! Reads and updates that set the same values again are retried on every
//! transient failure. Creates and appends are not idempotent: a request that
//! timed out or hit a 500 may already have been committed, so those are
//! resent only when Notion certainly did not act on them.

use super::{BlockChildrenQuery, NotionRepository};
use crate::error::AppError;
use crate::error_recovery::{retry_with_backoff, RetryPolicy};
use crate::types::{BlockId, DatabaseId, NotionId, PageId};
use serde_json::Value;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    /// Sending the request twice has the same effect as sending it once.
    Safe,
    /// A second send could duplicate the write.
    OnlyIfUnprocessed,
}

impl Replay {
    fn allows(self, error: &AppError) -> bool {
        match self {
            Replay::Safe => error.is_retryable(),
            Replay::OnlyIfUnprocessed => error.was_not_processed(),
        }
    }
}

/// Wraps a repository and retries its calls with exponential backoff.
pub struct RetryingRepository<R> {
    inner: R,
    policy: RetryPolicy,
}

impl<R: NotionRepository> RetryingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self::with_policy(inner, RetryPolicy::default())
    }

    pub fn with_policy(inner: R, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    async fn run<F, Fut>(&self, replay: Replay, operation: F) -> Result<Value, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Value, AppError>>,
    {
        retry_with_backoff(operation, self.policy, move |e| replay.allows(e)).await
    }
}

#[async_trait::async_trait]
impl<R: NotionRepository> NotionRepository for RetryingRepository<R> {
    async fn list_block_children(
        &self,
        block: &NotionId,
        query: &BlockChildrenQuery,
    ) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.list_block_children(block, query))
            .await
    }

    async fn append_block_children(
        &self,
        block: &BlockId,
        children: &[Value],
        after: Option<&BlockId>,
    ) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::OnlyIfUnprocessed, move || {
            inner.append_block_children(block, children, after)
        })
        .await
    }

    async fn retrieve_page(
        &self,
        page: &PageId,
        filter_properties: &[String],
    ) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.retrieve_page(page, filter_properties))
            .await
    }

    async fn create_page(&self, body: &Value) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::OnlyIfUnprocessed, move || inner.create_page(body))
            .await
    }

    async fn update_page(&self, page: &PageId, body: &Value) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.update_page(page, body))
            .await
    }

    async fn retrieve_database(&self, database: &DatabaseId) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.retrieve_database(database))
            .await
    }

    async fn query_database(
        &self,
        database: &DatabaseId,
        body: &Value,
    ) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.query_database(database, body))
            .await
    }

    async fn create_database(&self, body: &Value) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::OnlyIfUnprocessed, move || inner.create_database(body))
            .await
    }

    async fn update_database(
        &self,
        database: &DatabaseId,
        body: &Value,
    ) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.update_database(database, body))
            .await
    }

    async fn search(&self, body: &Value) -> Result<Value, AppError> {
        let inner = &self.inner;
        self.run(Replay::Safe, move || inner.search(body)).await
    }
}
