//! Domain models decoded from Reddit API payloads.
//!
//! Fields are a typed projection of what the service returns. Everything is
//! defaulted, and `null` reads as the default, so that partial payloads still
//! decode; the envelope decoders in
//! [`crate::envelope`] decide which of these types a response contains.

use serde::{Deserialize, Deserializer, Serialize};

use crate::envelope::deserialize_replies;

/// A subreddit as returned by `r/{name}/about`, the subreddit lists and the
/// `sr_detail` expansion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Subreddit {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Fullname, e.g. `t5_2rc7j`.
    #[serde(rename = "name")]
    #[serde(deserialize_with = "null_default")]
    pub full_id: String,
    pub created_utc: Option<f64>,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "display_name")]
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "display_name_prefixed")]
    #[serde(deserialize_with = "null_default")]
    pub name_prefixed: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(rename = "public_description")]
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "subreddit_type")]
    #[serde(deserialize_with = "null_default")]
    pub kind: String,
    pub suggested_comment_sort: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub subscribers: u64,
    pub active_user_count: Option<u64>,
    /// `sr_detail` spells this flag `over_18`, the about endpoint `over18`.
    #[serde(rename = "over18", alias = "over_18")]
    #[serde(deserialize_with = "null_default")]
    pub nsfw: bool,
    #[serde(rename = "user_is_moderator")]
    pub is_moderator: Option<bool>,
    #[serde(rename = "user_is_subscriber")]
    pub subscribed: Option<bool>,
    #[serde(rename = "user_has_favorited")]
    pub favorite: Option<bool>,
}

/// Minimal subreddit record returned by `api/search_subreddits`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubredditInfo {
    #[serde(default)]
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "subscriber_count", default)]
    #[serde(deserialize_with = "null_default")]
    pub subscribers: u64,
    #[serde(rename = "active_user_count", default)]
    #[serde(deserialize_with = "null_default")]
    pub active_users: u64,
}

/// A moderator of a subreddit.
///
/// `permissions` keeps the order the service reports.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Moderator {
    #[serde(default)]
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(default)]
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "mod_permissions", default)]
    #[serde(deserialize_with = "null_default")]
    pub permissions: Vec<String>,
}

/// A link or self post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Fullname, e.g. `t3_abc123`. Used as the pagination cursor.
    #[serde(rename = "name")]
    #[serde(deserialize_with = "null_default")]
    pub full_id: String,
    pub created_utc: Option<f64>,
    #[serde(deserialize_with = "null_default")]
    pub permalink: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(rename = "selftext")]
    #[serde(deserialize_with = "null_default")]
    pub body: String,
    pub likes: Option<bool>,
    #[serde(deserialize_with = "null_default")]
    pub score: i64,
    #[serde(deserialize_with = "null_default")]
    pub upvote_ratio: f64,
    #[serde(rename = "num_comments")]
    #[serde(deserialize_with = "null_default")]
    pub comment_count: u64,
    #[serde(rename = "subreddit")]
    #[serde(deserialize_with = "null_default")]
    pub subreddit_name: String,
    #[serde(rename = "subreddit_name_prefixed")]
    #[serde(deserialize_with = "null_default")]
    pub subreddit_name_prefixed: String,
    #[serde(deserialize_with = "null_default")]
    pub subreddit_id: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    #[serde(rename = "author_fullname")]
    pub author_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub spoiler: bool,
    #[serde(deserialize_with = "null_default")]
    pub locked: bool,
    #[serde(rename = "over_18")]
    #[serde(deserialize_with = "null_default")]
    pub nsfw: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_self: bool,
    #[serde(deserialize_with = "null_default")]
    pub saved: bool,
    #[serde(deserialize_with = "null_default")]
    pub stickied: bool,
}

/// A comment. `replies` holds the nested thread when the service inlines it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "name")]
    #[serde(deserialize_with = "null_default")]
    pub full_id: String,
    pub created_utc: Option<f64>,
    #[serde(deserialize_with = "null_default")]
    pub permalink: String,
    #[serde(deserialize_with = "null_default")]
    pub parent_id: String,
    #[serde(deserialize_with = "null_default")]
    pub link_id: String,
    #[serde(deserialize_with = "null_default")]
    pub body: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    #[serde(rename = "author_fullname")]
    pub author_id: Option<String>,
    #[serde(rename = "subreddit")]
    #[serde(deserialize_with = "null_default")]
    pub subreddit_name: String,
    #[serde(deserialize_with = "null_default")]
    pub score: i64,
    #[serde(deserialize_with = "null_default")]
    pub stickied: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_submitter: bool,
    #[serde(deserialize_with = "deserialize_replies")]
    pub replies: Vec<Comment>,
}

/// Placeholder for comments that were not loaded in a thread.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct More {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "name")]
    #[serde(deserialize_with = "null_default")]
    pub full_id: String,
    #[serde(deserialize_with = "null_default")]
    pub parent_id: String,
    #[serde(deserialize_with = "null_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_default")]
    pub depth: u64,
    #[serde(deserialize_with = "null_default")]
    pub children: Vec<String>,
}

/// One page of a listing, with the cursors needed to fetch its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            after: None,
            before: None,
        }
    }
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The service sends `null` for some fields; decode it like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subreddit_decodes_about_fields() {
        let subreddit: Subreddit = serde_json::from_value(json!({
            "id": "2rc7j",
            "name": "t5_2rc7j",
            "display_name": "golang",
            "display_name_prefixed": "r/golang",
            "title": "The Go Programming Language",
            "public_description": "Ask questions and post articles about Go.",
            "subreddit_type": "public",
            "subscribers": 210000,
            "active_user_count": null,
            "over18": false,
            "user_is_subscriber": true,
            "created_utc": 1257353000.0
        }))
        .unwrap();

        assert_eq!(subreddit.full_id, "t5_2rc7j");
        assert_eq!(subreddit.name, "golang");
        assert_eq!(subreddit.subscribers, 210000);
        assert_eq!(subreddit.active_user_count, None);
        assert_eq!(subreddit.subscribed, Some(true));
        assert_eq!(subreddit.created_utc, Some(1257353000.0));
    }

    #[test]
    fn test_subreddit_accepts_both_nsfw_spellings() {
        let about: Subreddit = serde_json::from_value(json!({ "over18": true })).unwrap();
        let detail: Subreddit = serde_json::from_value(json!({ "over_18": true })).unwrap();

        assert!(about.nsfw);
        assert!(detail.nsfw);
    }

    #[test]
    fn test_moderator_keeps_permission_order() {
        let moderator: Moderator = serde_json::from_value(json!({
            "id": "t2_1",
            "name": "spez",
            "mod_permissions": ["wiki", "all", "access"]
        }))
        .unwrap();

        assert_eq!(moderator.permissions, vec!["wiki", "all", "access"]);
    }

    #[test]
    fn test_subreddit_info_field_names() {
        let info: SubredditInfo = serde_json::from_value(json!({
            "name": "golang",
            "subscriber_count": 10,
            "active_user_count": 3
        }))
        .unwrap();

        assert_eq!(info.subscribers, 10);
        assert_eq!(info.active_users, 3);
    }

    #[test]
    fn test_comment_with_empty_string_replies() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "c1",
            "body": "hello",
            "replies": ""
        }))
        .unwrap();

        assert!(comment.replies.is_empty());
    }

    #[test]
    fn test_comment_with_nested_replies() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "c1",
            "replies": {
                "kind": "Listing",
                "data": {
                    "children": [
                        { "kind": "t1", "data": { "id": "c2", "body": "reply" } },
                        { "kind": "more", "data": { "id": "m1", "count": 4 } }
                    ]
                }
            }
        }))
        .unwrap();

        assert_eq!(comment.replies.len(), 1);
        assert_eq!(comment.replies[0].id, "c2");
    }

    #[test]
    fn test_page_default_is_empty() {
        let page: Page<Post> = Page::default();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.after, None);
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let subreddit: Subreddit = serde_json::from_value(json!({
            "display_name": "u_someone",
            "subscribers": null,
            "public_description": null,
            "over18": null,
            "url": null
        }))
        .unwrap();

        assert_eq!(subreddit.name, "u_someone");
        assert_eq!(subreddit.subscribers, 0);
        assert_eq!(subreddit.description, "");
        assert!(!subreddit.nsfw);
    }

    #[test]
    fn test_null_fields_in_posts_comments_and_moderators() {
        let post: Post = serde_json::from_value(json!({
            "id": "abc",
            "selftext": null,
            "score": null,
            "upvote_ratio": null,
            "stickied": null
        }))
        .unwrap();
        assert_eq!(post.body, "");
        assert_eq!(post.score, 0);

        let comment: Comment = serde_json::from_value(json!({
            "id": "c1",
            "body": null,
            "replies": null
        }))
        .unwrap();
        assert_eq!(comment.body, "");
        assert!(comment.replies.is_empty());

        let moderator: Moderator = serde_json::from_value(json!({
            "name": "spez",
            "mod_permissions": null
        }))
        .unwrap();
        assert!(moderator.permissions.is_empty());

        let more: More = serde_json::from_value(json!({ "count": null, "children": null })).unwrap();
        assert_eq!(more.count, 0);

        let info: SubredditInfo =
            serde_json::from_value(json!({ "name": "golang", "active_user_count": null })).unwrap();
        assert_eq!(info.active_users, 0);
    }
}
