// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The hn Authors

//! hn is a simple command-line client for [Hacker News]. It lists the
//! items on the front page, or the results of a search, and prints them
//! as plain text, Markdown, CSV or JSON.
//!
//! # Examples
//!
//! Display the top 30 stories on the front page:
//!
//! ```bash
//! hn
//! ```
//!
//! Display the 10 newest stories as Markdown, suitable for piping into a
//! Markdown renderer such as mdcat:
//!
//! ```bash
//! hn --ranking new --limit 10 --style markdown
//! ```
//!
//! Search for stories about Rust, most recent first, and export them as CSV:
//!
//! ```bash
//! hn --query rust --tags story --ranking date --style csv
//! ```
//!
//! Dump the best stories exactly as the API returns them:
//!
//! ```bash
//! hn --ranking best --style json
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! hn --help
//! ```
//!
//! # Configuration
//!
//! By default hn talks to the official [Hacker News API] and to the
//! [Algolia search API]. Set `$HN_API_URL` or `$HN_SEARCH_URL` to use a
//! different server for either one.
//!
//! Pass `-v` (repeatedly, for more detail) to log what hn is doing to
//! stderr.
//!
//! # License
//!
//! hn is licensed under the terms of the [Apache License 2.0].
//!
//! [Algolia search API]: https://hn.algolia.com/api
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [Hacker News]: https://news.ycombinator.com/
//! [Hacker News API]: https://github.com/HackerNews/API

pub mod batch;
pub mod cli;
pub mod clock;
pub mod conf;
pub mod hn;
pub mod http;
pub mod item;
pub mod text;
pub mod view;

#[cfg(test)]
mod test_utils;
