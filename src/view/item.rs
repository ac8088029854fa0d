//! Renders a single item.

use super::{Error, Style};
use crate::clock::{Clock, relative_time};
use crate::item::{Item, ItemId, ItemType};
use crate::text::{MAX_TEXT_LEN, pluralize, truncate};

const ITEM_BASE_URL: &str = "https://news.ycombinator.com/item?id=";
const USER_BASE_URL: &str = "https://news.ycombinator.com/user?id=";

pub(super) fn render<C: Clock>(item: &Item, style: Style, clock: &C) -> Result<String, Error> {
    match style {
        Style::Plain => Ok(Summary::new(item, clock)?.plain()),
        Style::Markdown => Ok(Summary::new(item, clock)?.markdown()),
        Style::Csv => csv_row(item),
        Style::Json => {
            ensure_known_type(item)?;
            Ok(serde_json::to_string_pretty(item)? + "\n")
        }
    }
}

pub(super) fn ensure_known_type(item: &Item) -> Result<(), Error> {
    match &item.item_type {
        ItemType::Unknown(t) => Err(Error::UnknownType(t.clone())),
        _ => Ok(()),
    }
}

/// The parts of an item shown in the human-oriented styles.
///
/// Stories and polls look the same, except that a poll always links to
/// itself.
#[derive(Debug)]
enum Summary<'a> {
    Job {
        id: ItemId,
        score: i32,
        title: &'a str,
        age: String,
    },
    Post {
        id: ItemId,
        by: &'a str,
        score: i32,
        comments: i32,
        title: &'a str,
        url: String,
        age: String,
    },
    PollOpt {
        id: ItemId,
        by: &'a str,
        score: i32,
        text: String,
        age: String,
    },
    Comment {
        id: ItemId,
        by: &'a str,
        replies: usize,
        text: String,
        age: String,
    },
}

impl<'a> Summary<'a> {
    fn new<C: Clock>(item: &'a Item, clock: &C) -> Result<Self, Error> {
        let id = item.id;
        let summary = match &item.item_type {
            ItemType::Job => Summary::Job {
                id,
                score: require(item, item.score, "score")?,
                title: require(item, item.title.as_deref(), "title")?,
                age: age(item, clock)?,
            },
            ItemType::Story => Summary::Post {
                id,
                by: require(item, item.by.as_deref(), "by")?,
                score: require(item, item.score, "score")?,
                comments: require(item, item.descendants, "descendants")?,
                title: require(item, item.title.as_deref(), "title")?,
                url: match item.url.as_deref() {
                    Some(url) if !url.is_empty() => url.to_string(),
                    _ => post_url(id),
                },
                age: age(item, clock)?,
            },
            ItemType::Poll => Summary::Post {
                id,
                by: require(item, item.by.as_deref(), "by")?,
                score: require(item, item.score, "score")?,
                comments: require(item, item.descendants, "descendants")?,
                title: require(item, item.title.as_deref(), "title")?,
                url: post_url(id),
                age: age(item, clock)?,
            },
            ItemType::PollOpt => Summary::PollOpt {
                id,
                by: require(item, item.by.as_deref(), "by")?,
                score: require(item, item.score, "score")?,
                text: truncate(require(item, item.text.as_deref(), "text")?, MAX_TEXT_LEN),
                age: age(item, clock)?,
            },
            ItemType::Comment => Summary::Comment {
                id,
                by: require(item, item.by.as_deref(), "by")?,
                replies: item.kid_count(),
                text: truncate(require(item, item.text.as_deref(), "text")?, MAX_TEXT_LEN),
                age: age(item, clock)?,
            },
            ItemType::Unknown(t) => return Err(Error::UnknownType(t.clone())),
        };
        Ok(summary)
    }

    fn plain(&self) -> String {
        match self {
            Summary::Job { id, score, age, .. } => {
                let pts = points(*score);
                format!("HIRING: {}\n└─── {score} {pts} {age}\n", post_url(*id))
            }
            Summary::Post {
                by,
                score,
                comments,
                url,
                age,
                ..
            } => {
                let pts = points(*score);
                let comments_str = pluralize((*comments).into(), "comment", "comments");
                format!("{url}\n└─── {score} {pts} by {by} {age} | {comments} {comments_str}\n")
            }
            Summary::PollOpt {
                by,
                score,
                text,
                age,
                ..
            } => {
                let pts = points(*score);
                format!("{text}\n└─── {score} {pts} by {by} {age}\n")
            }
            Summary::Comment {
                by,
                replies,
                text,
                age,
                ..
            } => {
                let replies_str = pluralize(*replies as i64, "reply", "replies");
                format!("{text}\n└─── by {by} {age} | {replies} {replies_str}\n")
            }
        }
    }

    fn markdown(&self) -> String {
        match self {
            Summary::Job {
                id,
                score,
                title,
                age,
            } => {
                let pts = points(*score);
                let post_url = post_url(*id);
                format!("* **[HIRING: {title}]({post_url})**\n* └─── {score} {pts} {age}\n")
            }
            Summary::Post {
                id,
                by,
                score,
                comments,
                title,
                url,
                age,
            } => {
                let pts = points(*score);
                let comments_str = pluralize((*comments).into(), "comment", "comments");
                let post_url = post_url(*id);
                let user_url = user_url(by);
                format!(
                    "* **[{title}]({url})**\n* └─── {score} {pts} by [{by}]({user_url}) {age} | [{comments} {comments_str}]({post_url})\n"
                )
            }
            Summary::PollOpt {
                id,
                by,
                score,
                text,
                age,
            } => {
                let pts = points(*score);
                let post_url = post_url(*id);
                let user_url = user_url(by);
                format!(
                    "* **[{text}]({post_url})**\n* └─── {score} {pts} by [{by}]({user_url}) {age}\n"
                )
            }
            Summary::Comment {
                id,
                by,
                replies,
                text,
                age,
            } => {
                let replies_str = pluralize(*replies as i64, "reply", "replies");
                let post_url = post_url(*id);
                let user_url = user_url(by);
                format!(
                    "* *[{text}]({post_url})*\n* └─── by [{by}]({user_url}) {age} | [{replies} {replies_str}]({post_url})\n"
                )
            }
        }
    }
}

/// A single CSV row: `id,type,by,time,"title_or_text",url,score,comment_count`.
///
/// Quotes and commas inside the title or text are not escaped.
fn csv_row(item: &Item) -> Result<String, Error> {
    let (title_or_text, comment_count) = match &item.item_type {
        ItemType::Job => (item.title.as_deref(), 0),
        ItemType::Story | ItemType::Poll => (item.title.as_deref(), item.descendants.unwrap_or(0)),
        ItemType::PollOpt => (item.text.as_deref(), 0),
        ItemType::Comment => (item.text.as_deref(), item.kid_count() as i32),
        ItemType::Unknown(t) => return Err(Error::UnknownType(t.clone())),
    };
    Ok(format!(
        "{},{},{},{},\"{}\",{},{},{}\n",
        item.id,
        item.item_type,
        item.by.as_deref().unwrap_or_default(),
        item.time.unwrap_or(0),
        title_or_text.unwrap_or_default(),
        item.url.as_deref().unwrap_or_default(),
        item.score.unwrap_or(0),
        comment_count,
    ))
}

fn require<T>(item: &Item, value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or(Error::MissingField { id: item.id, field })
}

fn age<C: Clock>(item: &Item, clock: &C) -> Result<String, Error> {
    let time = require(item, item.time, "time")?;
    let created = item.created_utc().ok_or(Error::InvalidTimestamp { id: item.id, time })?;
    Ok(relative_time(clock.now(), created)?)
}

fn points(score: i32) -> &'static str {
    pluralize(score.into(), "pt", "pts")
}

fn post_url(id: ItemId) -> String {
    format!("{ITEM_BASE_URL}{id}")
}

fn user_url(by: &str) -> String {
    format!("{USER_BASE_URL}{by}")
}
