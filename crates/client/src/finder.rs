use log::debug;
use reqwest::Method;
use snoo_core::envelope::Listing;
use snoo_core::models::{Page, Post};
use snoo_core::posts::{PostQuery, Sort, Timespan};

use crate::client::{Client, Response};
use crate::context::Context;
use crate::error::Result;

/// Finds posts from the specified subreddits.
///
/// Nothing is sent until [`PostFinder::execute`] is called. Executing does
/// not consume the finder, so the same search can be re-run with a new
/// cursor to walk through pages.
///
/// If no subreddits are specified, posts come from the front page the
/// service builds for the client (its subscriptions when authenticated).
#[derive(Debug, Clone)]
pub struct PostFinder<'a> {
    client: &'a Client,
    query: PostQuery,
}

impl<'a> PostFinder<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            query: PostQuery::new(),
        }
    }

    /// Wrap an already built query.
    pub fn from_query(client: &'a Client, query: PostQuery) -> Self {
        Self { client, query }
    }

    /// Restrict the search to these subreddits. An empty list lifts the
    /// restriction.
    pub fn restrict_to<I, S>(mut self, subreddits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query = self.query.restrict_to(subreddits);
        self
    }

    /// Find posts from r/all.
    pub fn from_all(mut self) -> Self {
        self.query = self.query.from_all();
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.query = self.query.sort(sort);
        self
    }

    pub fn timespan(mut self, timespan: Timespan) -> Self {
        self.query = self.query.timespan(timespan);
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.query = self.query.after(after);
        self
    }

    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.query = self.query.before(before);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.query = self.query.limit(limit);
        self
    }

    pub fn query(&self) -> &PostQuery {
        &self.query
    }

    /// Conduct the search.
    pub async fn execute(&self, ctx: &Context) -> Result<(Page<Post>, Response)> {
        let path = self.query.path_and_query()?;
        debug!("finding posts at {path}");

        let request = self.client.new_request(Method::GET, &path)?;
        let (root, response): (Listing<Post>, _) = self.client.send(ctx, request).await?;

        Ok((root.into_page(), response))
    }
}
