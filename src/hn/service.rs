// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The hn Authors

//! HTTPS connector for the Hacker News APIs.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Firebase and Algolia Hacker News APIs over HTTPS, essentially a
//! specialized HTTPS client that returns raw response bodies.

use crate::conf::Endpoints;
use crate::http::{HTTPError, HTTPResult, HTTPService};
use crate::item::{FrontPageRanking, ItemId, SearchRequest};
use itertools::Itertools;
use log::debug;
use reqwest::{Client, RequestBuilder};

/// A service for retrieving raw Hacker News data.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Hacker News API, such as an actual connector for production
/// code, and a canned connector for testing purposes.
pub trait Service: Send + Sync {
    /// Retrieves the JSON array of item ids for the front page, ordered by
    /// `ranking`.
    fn get_ranked_ids(
        &self,
        ranking: FrontPageRanking,
    ) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves the JSON representation of a single item.
    fn get_item(&self, id: ItemId) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Runs a search and retrieves the JSON search response.
    fn search(&self, request: &SearchRequest)
    -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Hacker News APIs directly.
#[derive(Debug)]
pub struct HackerNewsService {
    client: Client,
    endpoints: Endpoints,
}

impl HTTPService for HackerNewsService {}

impl HackerNewsService {
    /// Creates a new service talking to the given `endpoints`.
    pub fn new(endpoints: Endpoints) -> HTTPResult<Self> {
        let client = Self::client()?;
        Ok(Self { client, endpoints })
    }

    fn ranked_ids_uri(&self, ranking: FrontPageRanking) -> String {
        format!("{}/{}.json", self.endpoints.api(), ranking.endpoint())
    }

    fn item_uri(&self, id: ItemId) -> String {
        format!("{}/item/{id}.json", self.endpoints.api())
    }

    fn search_uri(&self, request: &SearchRequest) -> String {
        format!("{}/{}", self.endpoints.search(), request.ranking.endpoint())
    }

    fn search_params(request: &SearchRequest) -> [(&'static str, String); 3] {
        [
            ("query", request.query.clone()),
            ("tags", request.tags.iter().join(",")),
            ("hitsPerPage", request.limit.to_string()),
        ]
    }

    async fn get(&self, request: RequestBuilder) -> HTTPResult<String> {
        let resp = request.send().await.map_err(HTTPError::Request)?;
        debug!("{} returned {}", resp.url(), resp.status());

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            resp.text().await.map_err(HTTPError::Body)
        }
    }
}

impl Service for HackerNewsService {
    async fn get_ranked_ids(&self, ranking: FrontPageRanking) -> HTTPResult<String> {
        let uri = self.ranked_ids_uri(ranking);
        self.get(self.client.get(uri)).await
    }

    async fn get_item(&self, id: ItemId) -> HTTPResult<String> {
        let uri = self.item_uri(id);
        self.get(self.client.get(uri)).await
    }

    async fn search(&self, request: &SearchRequest) -> HTTPResult<String> {
        let uri = self.search_uri(request);
        let params = Self::search_params(request);
        self.get(self.client.get(uri).query(&params)).await
    }
}
