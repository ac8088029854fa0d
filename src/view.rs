// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The hn Authors

//! Renders items as text documents.
//!
//! Items can be rendered in one of several [`Style`]s. The human-oriented
//! styles (plain text and Markdown) show relative times, fall back to an
//! item's own Hacker News link when it has no URL and shorten long
//! comments. The machine-oriented styles (CSV and JSON) show the data as
//! it was fetched.

mod item;

use crate::clock::{self, Clock};
use crate::item::{Item, ItemId};
use clap::ValueEnum;
use thiserror::Error;

/// Output style of a rendered document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Style {
    /// Two lines of plain text per item.
    #[default]
    Plain,

    /// A Markdown list with links, two entries per item.
    #[value(alias = "md")]
    Markdown,

    /// One comma-separated row per item.
    Csv,

    /// A JSON array of the items exactly as fetched.
    Json,
}

/// An error rendering an item.
#[derive(Debug, Error)]
pub enum Error {
    /// An item of a type that cannot be rendered.
    #[error("invalid item type {0}")]
    UnknownType(String),

    /// An item missing a field its type is supposed to have.
    #[error("item {id} has no {field}")]
    MissingField {
        /// Id of the incomplete item.
        id: ItemId,

        /// Name of the missing field.
        field: &'static str,
    },

    /// An item whose timestamp cannot be represented as a date.
    #[error("item {id} has an invalid timestamp: {time}")]
    InvalidTimestamp {
        /// Id of the item.
        id: ItemId,

        /// The raw Unix timestamp.
        time: i64,
    },

    /// An error computing an item's age.
    #[error(transparent)]
    Time(#[from] clock::Error),

    /// An error serializing items.
    #[error("error formatting items as json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Marks something that can be converted into a string for display.
pub trait Viewable {
    /// Converts the value into a string in the given `style`.
    ///
    /// `clock` is a source of time from which relative times are derived.
    /// Generally [`SystemClock`](crate::clock::SystemClock) is used.
    fn view<C: Clock>(&self, style: Style, clock: &C) -> Result<String, Error>;
}

impl Viewable for Item {
    fn view<C: Clock>(&self, style: Style, clock: &C) -> Result<String, Error> {
        item::render(self, style, clock)
    }
}

impl Viewable for [Item] {
    /// Renders a whole list of items as a single document, in order.
    ///
    /// Rendering stops at the first item that cannot be rendered.
    fn view<C: Clock>(&self, style: Style, clock: &C) -> Result<String, Error> {
        match style {
            Style::Json => {
                for item in self {
                    item::ensure_known_type(item)?;
                }
                Ok(serde_json::to_string_pretty(self)? + "\n")
            }
            Style::Plain | Style::Markdown | Style::Csv => {
                self.iter().map(|item| item.view(style, clock)).collect()
            }
        }
    }
}
