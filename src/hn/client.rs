// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The hn Authors

//! Clients for reading data from the Hacker News API.

use crate::batch;
use crate::conf::Endpoints;
use crate::hn::service::{HackerNewsService, Service};
use crate::http::HTTPError;
use crate::item::{FrontPageRanking, Item, ItemId, SearchRequest, SearchResponse};
use log::debug;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;

/// Largest number of items that can be requested at once.
pub const MAX_LIMIT: usize = 500;

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// A limit outside of `0..=MAX_LIMIT`.
    #[error("Invalid limit: {0} (must be between 0 and {max})", max = MAX_LIMIT)]
    InvalidLimit(usize),

    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A search hit whose id is not an item id.
    #[error("Invalid search result id: {0}")]
    InvalidObjectId(String),

    /// A fetch task that did not run to completion.
    #[error("Fetch task failed: {0}")]
    Task(#[from] JoinError),
}

/// Retrieves item ids and items from Hacker News.
///
/// Cloning a client is cheap; clones share the same underlying service.
#[derive(Debug)]
pub struct HackerNews<S = HackerNewsService> {
    service: Arc<S>,
}

impl<S> Clone for HackerNews<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl HackerNews {
    /// Creates a new client that talks to the Hacker News APIs at the
    /// given `endpoints`.
    pub fn new(endpoints: Endpoints) -> Result<Self, Error> {
        let service = HackerNewsService::new(endpoints)?;
        Ok(Self::with_service(service))
    }
}

impl<S: Service + 'static> HackerNews<S> {
    /// Creates a new client backed by `service`.
    ///
    /// This is mostly useful for supplying a deterministic service in
    /// tests; production code should generally use [`HackerNews::new()`].
    pub fn with_service(service: S) -> Self {
        let service = Arc::new(service);
        Self { service }
    }

    /// Ids of the front page items in `ranking` order, at most `limit` of
    /// them.
    ///
    /// Returns [`Error::InvalidLimit`] without contacting the API if
    /// `limit` is greater than [`MAX_LIMIT`].
    pub async fn fetch_ranked_ids(
        &self,
        ranking: FrontPageRanking,
        limit: usize,
    ) -> Result<Vec<ItemId>, Error> {
        validate_limit(limit)?;
        let data = self.service.get_ranked_ids(ranking).await?;
        let mut ids: Vec<ItemId> = serde_json::from_str(&data)?;
        ids.truncate(limit);
        debug!("found {} {ranking:?} items", ids.len());
        Ok(ids)
    }

    /// Ids of the items matching a search, in the order requested by the
    /// search's ranking.
    ///
    /// Returns [`Error::InvalidLimit`] without contacting the API if the
    /// search's limit is greater than [`MAX_LIMIT`].
    pub async fn search_ids(&self, request: &SearchRequest) -> Result<Vec<ItemId>, Error> {
        validate_limit(request.limit)?;
        let data = self.service.search(request).await?;
        let response: SearchResponse = serde_json::from_str(&data)?;
        let ids = response
            .hits
            .into_iter()
            .take(request.limit)
            .map(|hit| {
                hit.object_id
                    .parse::<ItemId>()
                    .map_err(|_| Error::InvalidObjectId(hit.object_id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("found {} results for {:?}", ids.len(), request.query);
        Ok(ids)
    }

    /// Retrieves a single item.
    pub async fn fetch_item(&self, id: ItemId) -> Result<Item, Error> {
        let data = self.service.get_item(id).await?;
        Ok(Item::parse(&data)?)
    }

    /// Retrieves every item in `ids` concurrently.
    ///
    /// Items are returned in the same order as `ids`. If any item cannot
    /// be retrieved, no items are returned at all; see
    /// [`batch::fetch_all()`] for details.
    pub async fn fetch_items(&self, ids: &[ItemId]) -> Result<Vec<Item>, Error> {
        batch::fetch_all(ids, |id| {
            let client = self.clone();
            async move { client.fetch_item(id).await }
        })
        .await
    }
}

fn validate_limit(limit: usize) -> Result<(), Error> {
    if limit > MAX_LIMIT {
        Err(Error::InvalidLimit(limit))
    } else {
        Ok(())
    }
}
