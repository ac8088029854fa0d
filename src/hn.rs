//! Hacker News API clients and services for communicating with Hacker News
//! over HTTP.

pub mod client;
pub mod service;

pub use client::HackerNews;
pub use service::{HackerNewsService, Service};
