// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The hn Authors

//! An "item" in the Hacker News sense.
//!
//! Stories, comments, jobs, Ask HNs and even polls are just items in the
//! Hacker News API. They all share the same JSON shape; which fields are
//! actually present depends on the item's [`ItemType`].
//!
//! # See also
//!
//! - [Hacker News API](https://github.com/HackerNews/API#items)

use crate::clock::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a Hacker News item.
pub type ItemId = i32;

/// A single Hacker News item.
///
/// Every field except `id` and `type` is optional, because the API simply
/// omits fields that do not apply to an item. Absent fields stay absent
/// when an item is serialized again.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Item {
    /// The item's unique id.
    pub id: ItemId,

    /// `true` if the item is deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// The type of the item.
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// The username of the item's author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,

    /// Creation date of the item, in Unix time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// The comment, story or poll text in HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// `true` if the item is dead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead: Option<bool>,

    /// The comment's parent: either another comment or the relevant story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemId>,

    /// The poll option's associated poll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<ItemId>,

    /// The ids of the item's comments, in ranked display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<ItemId>>,

    /// The URL of the story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// The story's score, or the votes for a poll option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,

    /// The title of the story, poll or job, in HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// A list of related poll options, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<ItemId>>,

    /// In the case of stories or polls, the total comment count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<i32>,
}

impl Item {
    /// Creates a bare item with the given `id` and `item_type` and no
    /// other fields set.
    pub fn new(id: ItemId, item_type: ItemType) -> Self {
        Self {
            id,
            deleted: None,
            item_type,
            by: None,
            time: None,
            text: None,
            dead: None,
            parent: None,
            poll: None,
            kids: None,
            url: None,
            score: None,
            title: None,
            parts: None,
            descendants: None,
        }
    }

    /// Parses a single item from the body of an `item/<id>.json` response.
    pub fn parse(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    /// The date the item was created, in UTC.
    ///
    /// `None` if the item has no timestamp or the timestamp is out of
    /// range for a [`DateTime`].
    pub fn created_utc(&self) -> Option<DateTime<Utc>> {
        self.time
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
    }

    /// Number of direct replies to this item.
    pub fn kid_count(&self) -> usize {
        self.kids.as_ref().map_or(0, Vec::len)
    }
}

/// The kind of a Hacker News item.
///
/// Any type the API might add in the future is kept verbatim in
/// [`ItemType::Unknown`] so it can be reported instead of being rejected
/// while decoding.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    /// A job posting.
    Job,

    /// A link or text submission.
    Story,

    /// A reply to a story, poll or another comment.
    Comment,

    /// A poll.
    Poll,

    /// A single option of a poll.
    PollOpt,

    /// A type this client does not know how to handle.
    Unknown(String),
}

impl ItemType {
    /// The type as spelled by the Hacker News API.
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Job => "job",
            ItemType::Story => "story",
            ItemType::Comment => "comment",
            ItemType::Poll => "poll",
            ItemType::PollOpt => "pollopt",
            ItemType::Unknown(s) => s,
        }
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "job" => ItemType::Job,
            "story" => ItemType::Story,
            "comment" => ItemType::Comment,
            "poll" => ItemType::Poll,
            "pollopt" => ItemType::PollOpt,
            _ => ItemType::Unknown(s),
        }
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized ranking keyword.
#[derive(Debug, thiserror::Error)]
#[error("invalid ranking: {0}")]
pub struct InvalidRanking(pub String);

/// Ways the front page can be ranked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FrontPageRanking {
    /// Top stories.
    #[default]
    Top,

    /// Best stories.
    Best,

    /// Newest stories.
    New,
}

impl FrontPageRanking {
    /// The Firebase endpoint listing ids in this order.
    pub fn endpoint(&self) -> &'static str {
        match self {
            FrontPageRanking::Top => "topstories",
            FrontPageRanking::Best => "beststories",
            FrontPageRanking::New => "newstories",
        }
    }
}

impl FromStr for FrontPageRanking {
    type Err = InvalidRanking;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(FrontPageRanking::Top),
            "best" => Ok(FrontPageRanking::Best),
            "new" => Ok(FrontPageRanking::New),
            _ => Err(InvalidRanking(s.to_string())),
        }
    }
}

/// Ways search results can be ranked.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SearchRanking {
    /// Most recent first.
    Date,

    /// Most relevant, then most points, then most comments.
    #[default]
    Popularity,
}

impl SearchRanking {
    /// The Algolia endpoint returning hits in this order.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchRanking::Date => "search_by_date",
            SearchRanking::Popularity => "search",
        }
    }
}

impl FromStr for SearchRanking {
    type Err = InvalidRanking;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SearchRanking::Date),
            "popularity" => Ok(SearchRanking::Popularity),
            _ => Err(InvalidRanking(s.to_string())),
        }
    }
}

/// A full-text search against the Algolia Hacker News index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchRequest {
    /// Search terms.
    pub query: String,

    /// Algolia tags to filter on, such as `story` or `author_pg`.
    pub tags: Vec<String>,

    /// Ordering of the results.
    pub ranking: SearchRanking,

    /// Maximum number of results.
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    #[serde(rename = "objectID")]
    pub object_id: String,
}

#[cfg(test)]
mod tests {
    mod item {
        use super::super::*;
        use crate::test_utils::load_data;
        use pretty_assertions::assert_eq;

        #[test]
        fn it_parses_a_story() {
            let item = Item::parse(&load_data("item_456")).unwrap();
            assert_eq!(item.id, 456);
            assert_eq!(item.item_type, ItemType::Story);
            assert_eq!(item.by.as_deref(), Some("storyuser"));
            assert_eq!(item.url.as_deref(), Some("https://example.com/story"));
            assert_eq!(item.descendants, Some(20));
            assert_eq!(item.kids, Some(vec![457, 458]));
            assert_eq!(item.text, None);
        }

        #[test]
        fn it_keeps_unknown_types() {
            let item = Item::parse(r#"{"id": 1, "type": "launch"}"#).unwrap();
            assert_eq!(item.item_type, ItemType::Unknown(String::from("launch")));
            assert_eq!(item.item_type.to_string(), "launch");
        }

        #[test]
        fn it_fails_on_null() {
            assert!(Item::parse("null").is_err());
        }

        #[test]
        fn it_omits_absent_fields_when_serialized() {
            let mut item = Item::new(7, ItemType::PollOpt);
            item.score = Some(3);
            let json = serde_json::to_string(&item).unwrap();
            assert_eq!(json, r#"{"id":7,"type":"pollopt","score":3}"#);
        }

        #[test]
        fn it_returns_its_creation_date() {
            let mut item = Item::new(1, ItemType::Job);
            assert_eq!(item.created_utc(), None);
            item.time = Some(1_700_000_000);
            let expected = DateTime::parse_from_rfc3339("2023-11-14T22:13:20Z").unwrap();
            assert_eq!(item.created_utc(), Some(expected.with_timezone(&Utc)));
        }

        #[test]
        fn it_counts_its_kids() {
            let mut item = Item::new(1, ItemType::Comment);
            assert_eq!(item.kid_count(), 0);
            item.kids = Some(vec![2, 3, 4]);
            assert_eq!(item.kid_count(), 3);
        }
    }

    mod ranking {
        use super::super::*;

        #[test]
        fn it_parses_front_page_rankings() {
            assert_eq!("top".parse::<FrontPageRanking>().unwrap(), FrontPageRanking::Top);
            assert_eq!("best".parse::<FrontPageRanking>().unwrap(), FrontPageRanking::Best);
            assert_eq!("new".parse::<FrontPageRanking>().unwrap(), FrontPageRanking::New);
            assert!("date".parse::<FrontPageRanking>().is_err());
        }

        #[test]
        fn it_parses_search_rankings() {
            assert_eq!("date".parse::<SearchRanking>().unwrap(), SearchRanking::Date);
            assert_eq!(
                "popularity".parse::<SearchRanking>().unwrap(),
                SearchRanking::Popularity
            );
            assert!("top".parse::<SearchRanking>().is_err());
        }

        #[test]
        fn it_maps_rankings_to_endpoints() {
            assert_eq!(FrontPageRanking::Best.endpoint(), "beststories");
            assert_eq!(SearchRanking::Date.endpoint(), "search_by_date");
            assert_eq!(SearchRanking::Popularity.endpoint(), "search");
        }
    }
}
