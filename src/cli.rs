//! Drives the command-line program.

use crate::clock::{Clock, SystemClock};
use crate::conf::Endpoints;
use crate::hn::{HackerNews, HackerNewsService, Service, client};
use crate::item::{FrontPageRanking, InvalidRanking, SearchRanking, SearchRequest};
use crate::view::{self, Style, Viewable};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use std::io::{self, Write};
use std::process;
use std::str::FromStr;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// A program error.
#[derive(Debug, Error)]
pub enum Error {
    /// An unknown front page ranking.
    #[error("invalid front page ranking: {0}")]
    InvalidFrontPageRanking(String),

    /// An unknown search ranking.
    #[error("invalid search ranking: {0}")]
    InvalidSearchRanking(String),

    /// An error retrieving items.
    #[error(transparent)]
    Client(#[from] client::Error),

    /// An error rendering items.
    #[error(transparent)]
    View(#[from] view::Error),

    /// An error writing the output.
    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "A simple command-line Hacker News client", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Max number of results to fetch (at most 500)
    #[arg(short, long, default_value_t = 30, value_name = "N")]
    limit: usize,

    /// Output style
    #[arg(short, long, value_enum, default_value_t = Style::Plain)]
    style: Style,

    /// Ranking method: top|new|best for front page items (default: top),
    /// date|popularity for search results (default: popularity)
    #[arg(short, long)]
    ranking: Option<String>,

    /// Search query for searching items via the Algolia API
    #[arg(short = 'Q', long)]
    query: Option<String>,

    /// Only show search results with these tags, such as "story" or "author_pg"
    #[arg(short, long, value_delimiter = ',', requires = "query")]
    tags: Vec<String>,
}

/// What to list: the front page, or the results of a search.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    /// Front page items.
    FrontPage {
        /// Order of the items.
        ranking: FrontPageRanking,

        /// Maximum number of items.
        limit: usize,
    },

    /// Search results.
    Search(SearchRequest),
}

impl Config {
    /// How verbose logging should be.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The chosen output style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Works out what should be listed.
    ///
    /// `--ranking` is interpreted as a search ranking if a query was given,
    /// and as a front page ranking otherwise. Returns an error for unknown
    /// rankings.
    pub fn listing(&self) -> Result<Listing, Error> {
        let ranking = self.ranking.as_deref().filter(|s| !s.is_empty());

        match self.query.as_deref().filter(|s| !s.is_empty()) {
            Some(query) => {
                let ranking = parse_ranking::<SearchRanking>(ranking)
                    .map_err(|InvalidRanking(s)| Error::InvalidSearchRanking(s))?;
                Ok(Listing::Search(SearchRequest {
                    query: query.to_string(),
                    tags: self.tags.clone(),
                    ranking,
                    limit: self.limit,
                }))
            }
            None => {
                let ranking = parse_ranking::<FrontPageRanking>(ranking)
                    .map_err(|InvalidRanking(s)| Error::InvalidFrontPageRanking(s))?;
                Ok(Listing::FrontPage {
                    ranking,
                    limit: self.limit,
                })
            }
        }
    }
}

fn parse_ranking<R>(ranking: Option<&str>) -> Result<R, InvalidRanking>
where
    R: FromStr<Err = InvalidRanking> + Default,
{
    ranking.map(R::from_str).transpose().map(Option::unwrap_or_default)
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner<S = HackerNewsService> {
    config: Config,
    client: HackerNews<S>,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    ///
    /// The Hacker News endpoints are read from the environment; see
    /// [`Endpoints::from_env()`].
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = HackerNews::new(Endpoints::from_env())?;
        Ok(Self::with_client(config, client))
    }
}

impl<S: Service + 'static> Runner<S> {
    /// Create a new program runner that retrieves items using `client`.
    pub fn with_client(config: Config, client: HackerNews<S>) -> Self {
        Self { config, client }
    }

    /// Fetches the configured listing and renders it as a single document.
    ///
    /// `clock` is used to compute relative times.
    pub async fn output<C: Clock>(&self, clock: &C) -> Result<String, Error> {
        let ids = match self.config.listing()? {
            Listing::FrontPage { ranking, limit } => {
                self.client.fetch_ranked_ids(ranking, limit).await?
            }
            Listing::Search(request) => self.client.search_ids(&request).await?,
        };
        debug!("rendering {} items as {:?}", ids.len(), self.config.style());

        let items = self.client.fetch_items(&ids).await?;
        Ok(items.view(self.config.style(), clock)?)
    }

    /// Run the command-line program using its stored configuration options,
    /// printing the rendered document to stdout.
    pub async fn run(&self) -> Result<(), Error> {
        let output = self.output(&SystemClock).await?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Runs the command-line program against the live Hacker News API.
pub async fn run(config: Config) -> Result<(), Error> {
    Runner::new(config)?.run().await
}
