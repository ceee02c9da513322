//! Post search parameters.
//!
//! [`PostQuery`] accumulates where to look (subreddits), how to order
//! (sort, time window) and which page to fetch (cursors, limit). It performs
//! no I/O; the client resolves it into a request path with
//! [`PostQuery::path_and_query`] when the search is executed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::query::{add_options, cursor, path_segment, positive_limit, QueryError};
use crate::subreddit::ALL;

/// Sort order of a post listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sort {
    #[default]
    Hot,
    New,
    Top,
    Rising,
    Controversial,
    Best,
}

impl Sort {
    pub const ALL: [Sort; 6] = [
        Sort::Hot,
        Sort::New,
        Sort::Top,
        Sort::Rising,
        Sort::Controversial,
        Sort::Best,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sort::Hot => "hot",
            Sort::New => "new",
            Sort::Top => "top",
            Sort::Rising => "rising",
            Sort::Controversial => "controversial",
            Sort::Best => "best",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sort::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid sort: {s}. Valid sorts: hot, new, top, rising, controversial, best"
                )
            })
    }
}

/// Time window for `top` and `controversial` listings. Sent as `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl Timespan {
    pub const ALL: [Timespan; 6] = [
        Timespan::Hour,
        Timespan::Day,
        Timespan::Week,
        Timespan::Month,
        Timespan::Year,
        Timespan::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timespan::Hour => "hour",
            Timespan::Day => "day",
            Timespan::Week => "week",
            Timespan::Month => "month",
            Timespan::Year => "year",
            Timespan::All => "all",
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timespan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timespan::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("Invalid time window: {s}. Valid windows: hour, day, week, month, year, all")
            })
    }
}

/// Query options of a post listing. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub timespan: Option<Timespan>,
}

/// Accumulated parameters of a post search.
///
/// With no subreddits the listing is resolved against the front page the
/// service picks for the caller (their subscriptions when authenticated).
/// Cursors and time window are passed through as given: setting both
/// cursors, or a time window on a sort that ignores it, is left to the
/// service to interpret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    subreddits: Vec<String>,
    sort: Sort,
    options: PostListOptions,
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the subreddits to search. An empty list removes the restriction.
    pub fn restrict_to<I, S>(mut self, subreddits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subreddits = subreddits.into_iter().map(Into::into).collect();
        self
    }

    /// Search r/all.
    pub fn from_all(self) -> Self {
        self.restrict_to([ALL])
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn timespan(mut self, timespan: Timespan) -> Self {
        self.options.timespan = Some(timespan);
        self
    }

    /// Fetch the page after this fullname. An empty token clears the cursor.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.options.after = cursor(after.into());
        self
    }

    /// Fetch the page before this fullname. An empty token clears the cursor.
    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.options.before = cursor(before.into());
        self
    }

    /// Cap the number of posts. Zero or negative leaves the service default.
    pub fn limit(mut self, limit: i64) -> Self {
        self.options.limit = positive_limit(limit);
        self
    }

    pub fn subreddits(&self) -> &[String] {
        &self.subreddits
    }

    pub fn sort_order(&self) -> Sort {
        self.sort
    }

    pub fn options(&self) -> &PostListOptions {
        &self.options
    }

    /// `r/{a+b}/{sort}` when restricted to subreddits, `{sort}` otherwise.
    pub fn path(&self) -> String {
        if self.subreddits.is_empty() {
            self.sort.to_string()
        } else {
            format!("r/{}/{}", self.subreddits.join("+"), self.sort)
        }
    }

    /// The listing path with every set option encoded as a query string.
    ///
    /// Fails when a subreddit name is not a single path segment.
    pub fn path_and_query(&self) -> Result<String, QueryError> {
        for subreddit in &self.subreddits {
            path_segment(subreddit)?;
        }
        add_options(&self.path(), &self.options)
    }
}
