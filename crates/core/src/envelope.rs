//! Envelope decoders for Reddit API responses.
//!
//! The service wraps every payload, but not always the same way. Each
//! endpoint knows which wrapper it answers with, so instead of one decoder
//! that guesses the shape at runtime there is one type per wrapper:
//!
//! - [`Thing`]: a single entity tagged with its kind, `{kind, data}`.
//! - [`Listing`]: a page of things, `{data: {children: [...], after, before}}`.
//! - [`SubredditNames`] and [`SubredditInfoList`]: a bare named array.
//! - [`ModeratorList`]: a listing whose children are untagged records.
//! - [`RandomListing`]: a listing whose first child embeds the subreddit
//!   under `sr_detail`.
//! - [`PostAndComments`]: the two-listing array returned by comment pages.
//!
//! Missing data is never an error here. An absent entity decodes to `None`
//! and an absent array to an empty `Vec`; only a body that does not match the
//! wrapper at all fails to decode.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{Comment, Moderator, More, Page, Post, Subreddit, SubredditInfo};

/// `{kind, data}` wrapper around a single entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Thing<T> {
    pub kind: Option<String>,
    pub data: Option<T>,
}

impl<T> Thing<T> {
    /// Unwrap the entity. A wrapper without `data` yields `None`.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Paginated collection of things.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<Thing<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl<T> Listing<T> {
    /// Resolve the listing into a page, keeping the order of the children.
    ///
    /// Children without `data` are dropped. Empty cursors become `None`.
    pub fn into_page(self) -> Page<T> {
        let ListingData {
            children,
            after,
            before,
        } = self.data;

        Page {
            items: children.into_iter().filter_map(Thing::into_data).collect(),
            after: non_empty(after),
            before: non_empty(before),
        }
    }
}

/// Response of `api/search_reddit_names`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubredditNames {
    #[serde(default)]
    pub names: Vec<String>,
}

impl SubredditNames {
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Response of `api/search_subreddits`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubredditInfoList {
    #[serde(default)]
    pub subreddits: Vec<SubredditInfo>,
}

impl SubredditInfoList {
    pub fn into_subreddits(self) -> Vec<SubredditInfo> {
        self.subreddits
    }
}

/// Response of `r/{name}/about/moderators`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModeratorList {
    pub kind: Option<String>,
    pub data: ModeratorListData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeratorListData {
    #[serde(default)]
    pub children: Vec<Moderator>,
}

impl ModeratorList {
    pub fn into_moderators(self) -> Vec<Moderator> {
        self.data.children
    }
}

/// Response of `r/random` and `r/randnsfw` when called with `sr_detail=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomListing {
    data: RandomListingData,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RandomListingData {
    #[serde(default)]
    children: Vec<RandomChild>,
}

#[derive(Debug, Clone, Deserialize)]
struct RandomChild {
    #[serde(default)]
    data: RandomChildData,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RandomChildData {
    sr_detail: Option<Subreddit>,
}

impl RandomListing {
    /// The subreddit embedded in the first child, or `None` when the pick
    /// came back empty.
    pub fn into_subreddit(self) -> Option<Subreddit> {
        self.data
            .children
            .into_iter()
            .next()
            .and_then(|child| child.data.sr_detail)
    }
}

/// A child of a comment listing, tagged by its kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum CommentChild {
    #[serde(rename = "t1")]
    Comment(Comment),
    #[serde(rename = "more")]
    More(More),
}

/// Listing of comments, as found in comment pages and in `replies`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentListing {
    pub data: CommentListingData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentListingData {
    #[serde(default)]
    pub children: Vec<CommentChild>,
}

impl CommentListing {
    /// Split the children into comments, in order, and the trailing
    /// "load more" stub if there is one.
    pub fn into_parts(self) -> (Vec<Comment>, Option<More>) {
        let mut comments = Vec::new();
        let mut more = None;

        for child in self.data.children {
            match child {
                CommentChild::Comment(comment) => comments.push(comment),
                CommentChild::More(stub) => more = Some(stub),
            }
        }

        (comments, more)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Replies {
    Listing(CommentListing),
    Empty(serde::de::IgnoredAny),
}

/// `replies` is `""` when a comment has none and a listing otherwise.
/// Anything that is not a listing decodes as no replies.
pub(crate) fn deserialize_replies<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Replies>::deserialize(deserializer)? {
        Some(Replies::Listing(listing)) => Ok(listing.into_parts().0),
        Some(Replies::Empty(_)) | None => Ok(Vec::new()),
    }
}

/// A post together with its comment thread.
///
/// Comment pages (including `r/{name}/about/sticky`) answer with a JSON array
/// of two listings: the first holds the post, the second its comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostAndComments {
    pub post: Option<Post>,
    pub comments: Vec<Comment>,
    pub more: Option<More>,
}

impl<'de> Deserialize<'de> for PostAndComments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (posts, comments): (Listing<Post>, CommentListing) =
            Deserialize::deserialize(deserializer)?;
        let (comments, more) = comments.into_parts();

        Ok(Self {
            post: posts.into_page().items.into_iter().next(),
            comments,
            more,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
