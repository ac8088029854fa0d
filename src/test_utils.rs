use crate::clock::{Clock, DateTime, TimeDelta, Utc};
use crate::hn::Service;
use crate::http::{HTTPError, HTTPResult};
use crate::item::{FrontPageRanking, Item, ItemId, ItemType, SearchRanking, SearchRequest};
use reqwest::StatusCode;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Counts the requests a [`TestService`] has answered.
#[derive(Clone, Debug, Default)]
pub struct RequestCounter(Arc<AtomicUsize>);

impl RequestCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Answers requests with canned responses from `tests/data`.
///
/// Searches are answered from `search_{query}_{ranking}`. Resources
/// without a data file are answered with a 404.
#[derive(Debug, Default)]
pub struct TestService {
    requests: RequestCounter,
}

impl TestService {
    pub fn requests(&self) -> RequestCounter {
        self.requests.clone()
    }

    fn load(&self, resource: &str) -> HTTPResult<String> {
        self.requests.0.fetch_add(1, Ordering::SeqCst);
        fs::read_to_string(format!("tests/data/{resource}.json"))
            .map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

impl Service for TestService {
    async fn get_ranked_ids(&self, ranking: FrontPageRanking) -> HTTPResult<String> {
        self.load(ranking.endpoint())
    }

    async fn get_item(&self, id: ItemId) -> HTTPResult<String> {
        self.load(&format!("item_{id}"))
    }

    async fn search(&self, request: &SearchRequest) -> HTTPResult<String> {
        let suffix = match request.ranking {
            SearchRanking::Date => "date",
            SearchRanking::Popularity => "popularity",
        };
        self.load(&format!("search_{}_{suffix}", request.query))
    }
}

pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::from_timestamp(10_000_000, 0).expect("invalid date supplied");
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}

fn ago(delta: TimeDelta) -> Option<i64> {
    Some((FrozenClock::default().now() - delta).timestamp())
}

/// A job posted 6 hours ago.
pub fn job() -> Item {
    let mut item = Item::new(1, ItemType::Job);
    item.score = Some(1);
    item.by = Some(String::from("jobuser"));
    item.time = ago(TimeDelta::hours(6));
    item.title = Some(String::from("Job title"));
    item
}

/// A story with a URL posted 12 days ago.
pub fn story() -> Item {
    let mut item = Item::new(2, ItemType::Story);
    item.score = Some(10);
    item.by = Some(String::from("storyuser"));
    item.time = ago(TimeDelta::days(12));
    item.descendants = Some(20);
    item.title = Some(String::from("Story title"));
    item.url = Some(String::from("www.story.url"));
    item
}

/// A poll posted 40 minutes ago.
pub fn poll() -> Item {
    let mut item = Item::new(3, ItemType::Poll);
    item.score = Some(100);
    item.by = Some(String::from("polluser"));
    item.time = ago(TimeDelta::minutes(40));
    item.descendants = Some(200);
    item.title = Some(String::from("Poll title"));
    item
}

/// A poll option posted 3 months ago.
pub fn pollopt() -> Item {
    let mut item = Item::new(4, ItemType::PollOpt);
    item.score = Some(1000);
    item.by = Some(String::from("polloptuser"));
    item.time = ago(TimeDelta::days(90));
    item.text = Some(String::from("Poll option text"));
    item
}

/// A comment with 4 replies posted a day ago.
pub fn comment() -> Item {
    let mut item = Item::new(5, ItemType::Comment);
    item.by = Some(String::from("commentuser"));
    item.time = ago(TimeDelta::days(1));
    item.text = Some(String::from("Comment text"));
    item.kids = Some(vec![6, 7, 8, 9]);
    item
}
