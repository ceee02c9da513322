//! Endpoint paths and request payloads of the subreddit API.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Name of the subreddit aggregating all public content.
pub const ALL: &str = "all";

/// Path of the subscription endpoint.
pub const SUBSCRIBE_PATH: &str = "api/subscribe";

/// Path of the detailed prefix search.
pub const SEARCH_PATH: &str = "api/search_subreddits";

/// Path of the names-only prefix search.
pub const SEARCH_NAMES_PATH: &str = "api/search_reddit_names";

pub fn about_path(name: &str) -> String {
    format!("r/{name}/about")
}

pub fn sticky_path(name: &str) -> String {
    format!("r/{name}/about/sticky")
}

pub fn moderators_path(name: &str) -> String {
    format!("r/{name}/about/moderators")
}

pub fn random_path(nsfw: bool) -> &'static str {
    if nsfw {
        "r/randnsfw"
    } else {
        "r/random"
    }
}

/// The subreddit collections exposed as listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubredditList {
    Popular,
    New,
    Gold,
    Default,
    /// Subreddits the caller is subscribed to.
    Subscribed,
    /// Subreddits the caller is an approved user in.
    Approved,
    /// Subreddits the caller moderates.
    Moderated,
}

impl SubredditList {
    pub const ALL: [SubredditList; 7] = [
        SubredditList::Popular,
        SubredditList::New,
        SubredditList::Gold,
        SubredditList::Default,
        SubredditList::Subscribed,
        SubredditList::Approved,
        SubredditList::Moderated,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SubredditList::Popular => "subreddits/popular",
            SubredditList::New => "subreddits/new",
            SubredditList::Gold => "subreddits/gold",
            SubredditList::Default => "subreddits/default",
            SubredditList::Subscribed => "subreddits/mine/subscriber",
            SubredditList::Approved => "subreddits/mine/contributor",
            SubredditList::Moderated => "subreddits/mine/moderator",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubredditList::Popular => "popular",
            SubredditList::New => "new",
            SubredditList::Gold => "gold",
            SubredditList::Default => "default",
            SubredditList::Subscribed => "subscribed",
            SubredditList::Approved => "approved",
            SubredditList::Moderated => "moderated",
        }
    }
}

impl fmt::Display for SubredditList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubredditList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubredditList::ALL
            .into_iter()
            .find(|list| list.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid list: {s}. Valid lists: popular, new, gold, default, subscribed, approved, moderated"
                )
            })
    }
}

/// Which of the two sticky slots to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickySlot {
    First,
    Second,
}

impl StickySlot {
    pub fn num(self) -> u8 {
        match self {
            StickySlot::First => 1,
            StickySlot::Second => 2,
        }
    }
}

impl TryFrom<u8> for StickySlot {
    type Error = String;

    fn try_from(num: u8) -> Result<Self, Self::Error> {
        match num {
            1 => Ok(StickySlot::First),
            2 => Ok(StickySlot::Second),
            _ => Err(format!("Invalid sticky slot: {num}. Use 1 or 2")),
        }
    }
}

/// Query of `r/{name}/about/sticky`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StickyQuery {
    pub num: u8,
}

impl From<StickySlot> for StickyQuery {
    fn from(slot: StickySlot) -> Self {
        Self { num: slot.num() }
    }
}

/// Query of `r/random` and `r/randnsfw`: expand the subreddit of a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RandomQuery {
    pub sr_detail: bool,
    pub limit: u32,
}

impl Default for RandomQuery {
    fn default() -> Self {
        Self {
            sr_detail: true,
            limit: 1,
        }
    }
}

/// Query (or form) of the prefix search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery<'a> {
    pub query: &'a str,
}

/// Subscription direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeAction {
    Subscribe,
    Unsubscribe,
}

impl SubscribeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscribeAction::Subscribe => "sub",
            SubscribeAction::Unsubscribe => "unsub",
        }
    }
}

impl Serialize for SubscribeAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Form body of `api/subscribe`.
///
/// Subreddits are addressed either by name (`sr_name`) or by fullname
/// (`sr`), never both; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionForm {
    action: SubscribeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    sr_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sr: Option<String>,
}

impl SubscriptionForm {
    pub fn by_name<S: AsRef<str>>(action: SubscribeAction, names: &[S]) -> Self {
        Self {
            action,
            sr_name: Some(join(names)),
            sr: None,
        }
    }

    pub fn by_id<S: AsRef<str>>(action: SubscribeAction, ids: &[S]) -> Self {
        Self {
            action,
            sr_name: None,
            sr: Some(join(ids)),
        }
    }

    pub fn action(&self) -> SubscribeAction {
        self.action
    }
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::add_options;

    #[test]
    fn test_about_paths() {
        assert_eq!(about_path("golang"), "r/golang/about");
        assert_eq!(sticky_path("golang"), "r/golang/about/sticky");
        assert_eq!(moderators_path("golang"), "r/golang/about/moderators");
    }

    #[test]
    fn test_random_path() {
        assert_eq!(random_path(false), "r/random");
        assert_eq!(random_path(true), "r/randnsfw");
    }

    #[test]
    fn test_subreddit_list_paths() {
        assert_eq!(SubredditList::Popular.path(), "subreddits/popular");
        assert_eq!(SubredditList::New.path(), "subreddits/new");
        assert_eq!(SubredditList::Gold.path(), "subreddits/gold");
        assert_eq!(SubredditList::Default.path(), "subreddits/default");
        assert_eq!(SubredditList::Subscribed.path(), "subreddits/mine/subscriber");
        assert_eq!(SubredditList::Approved.path(), "subreddits/mine/contributor");
        assert_eq!(SubredditList::Moderated.path(), "subreddits/mine/moderator");
    }

    #[test]
    fn test_subreddit_list_from_str() {
        for list in SubredditList::ALL {
            assert_eq!(list.as_str().parse::<SubredditList>().unwrap(), list);
        }
        assert!("trending".parse::<SubredditList>().is_err());
    }

    #[test]
    fn test_sticky_queries_differ_only_in_num() {
        let first = add_options(&sticky_path("golang"), &StickyQuery::from(StickySlot::First));
        let second = add_options(&sticky_path("golang"), &StickyQuery::from(StickySlot::Second));

        assert_eq!(first.unwrap(), "r/golang/about/sticky?num=1");
        assert_eq!(second.unwrap(), "r/golang/about/sticky?num=2");
    }

    #[test]
    fn test_sticky_slot_try_from() {
        assert_eq!(StickySlot::try_from(1).unwrap(), StickySlot::First);
        assert_eq!(StickySlot::try_from(2).unwrap(), StickySlot::Second);
        assert!(StickySlot::try_from(3).is_err());
    }

    #[test]
    fn test_random_query() {
        let path = add_options(random_path(false), &RandomQuery::default()).unwrap();
        assert_eq!(path, "r/random?sr_detail=true&limit=1");
    }

    #[test]
    fn test_search_query_encoding() {
        let path = add_options(SEARCH_NAMES_PATH, &SearchQuery { query: "go lang" }).unwrap();
        assert_eq!(path, "api/search_reddit_names?query=go+lang");
    }

    #[test]
    fn test_subscription_form_by_name() {
        let form = SubscriptionForm::by_name(SubscribeAction::Subscribe, &["golang", "rust"]);
        let encoded = serde_urlencoded::to_string(&form).unwrap();
        assert_eq!(encoded, "action=sub&sr_name=golang%2Crust");
    }

    #[test]
    fn test_subscription_form_by_id() {
        let form = SubscriptionForm::by_id(SubscribeAction::Unsubscribe, &["t5_a", "t5_b"]);
        let encoded = serde_urlencoded::to_string(&form).unwrap();
        assert_eq!(encoded, "action=unsub&sr=t5_a%2Ct5_b");
    }

    #[test]
    fn test_subscription_form_never_sets_both_targets() {
        for action in [SubscribeAction::Subscribe, SubscribeAction::Unsubscribe] {
            let by_name = serde_urlencoded::to_string(SubscriptionForm::by_name(action, &["a"]))
                .unwrap();
            let by_id = serde_urlencoded::to_string(SubscriptionForm::by_id(action, &["t5_a"]))
                .unwrap();

            assert!(by_name.contains("sr_name=") && !by_name.contains("&sr="));
            assert!(by_id.contains("&sr=") && !by_id.contains("sr_name="));
            assert!(by_name.starts_with(&format!("action={}&", action.as_str())));
        }
    }
}
