use hn::conf::Endpoints;
use hn::hn::{HackerNewsService, Service};
use hn::item::{FrontPageRanking, SearchRequest};

// These tests talk to the live Hacker News API, so all we can really check
// is that we get something back and that the types line up.

#[tokio::test]
#[ignore = "requires network access"]
async fn it_retrieves_top_stories() {
    let service = HackerNewsService::new(Endpoints::default()).unwrap();
    let resp = service.get_ranked_ids(FrontPageRanking::Top).await.unwrap();
    assert!(resp.starts_with('['));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn it_retrieves_items() {
    let service = HackerNewsService::new(Endpoints::default()).unwrap();
    let resp = service.get_item(8863).await.unwrap();
    assert_ne!(resp, "");
}

#[tokio::test]
#[ignore = "requires network access"]
async fn it_searches() {
    let service = HackerNewsService::new(Endpoints::default()).unwrap();
    let request = SearchRequest {
        query: String::from("rust"),
        tags: vec![String::from("story")],
        limit: 5,
        ..SearchRequest::default()
    };
    let resp = service.search(&request).await.unwrap();
    assert!(resp.contains("\"hits\""));
}
