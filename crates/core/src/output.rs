//! Output models for the CLI and their transformation functions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::envelope::PostAndComments;
use crate::models::{Comment, Moderator, Page, Post, Subreddit};
use crate::posts::PostQuery;
use crate::subreddit::{StickySlot, SubredditList, SubscribeAction};

/// Individual post in a listing
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PostItem {
    pub id: String,
    pub full_id: String,
    pub title: String,
    pub author: String,
    pub subreddit: String,
    pub score: i64,
    pub comments: u64,
    pub url: String,
    pub permalink: String,
    pub time: Option<String>,
    pub stickied: bool,
    pub nsfw: bool,
}

/// Complete post listing output with cursors
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PostListOutput {
    pub subreddits: Vec<String>,
    pub sort: String,
    pub timespan: Option<String>,
    pub posts: Vec<PostItem>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Subreddit summary
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubredditItem {
    pub name: String,
    pub full_id: String,
    pub title: String,
    pub description: String,
    pub subscribers: u64,
    pub active_users: Option<u64>,
    pub nsfw: bool,
    pub url: String,
    pub created: Option<String>,
}

/// Subreddit list output with cursors
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubredditListOutput {
    pub list: String,
    pub subreddits: Vec<SubredditItem>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Individual comment output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CommentItem {
    pub id: String,
    pub author: String,
    pub time: Option<String>,
    pub body: String,
    pub score: i64,
    pub replies_count: usize,
}

/// Sticky post output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StickyOutput {
    pub subreddit: String,
    pub slot: u8,
    pub post: Option<PostItem>,
    pub body: Option<String>,
    pub comments: Vec<CommentItem>,
    pub more_comments: u64,
}

/// Moderator list output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ModeratorListOutput {
    pub subreddit: String,
    pub moderators: Vec<Moderator>,
}

/// Result of a subscription change
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubscriptionOutput {
    pub action: String,
    pub by_id: bool,
    pub subreddits: Vec<String>,
    pub status: u16,
}

/// Convert a Unix timestamp in seconds to a formatted string
pub fn format_timestamp(timestamp: Option<f64>) -> Option<String> {
    timestamp.and_then(|ts| {
        let dt = DateTime::<Utc>::from_timestamp(ts.trunc() as i64, 0)?;
        Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    })
}

pub fn transform_post(post: &Post) -> PostItem {
    PostItem {
        id: post.id.clone(),
        full_id: post.full_id.clone(),
        title: post.title.clone(),
        author: post.author.clone(),
        subreddit: post.subreddit_name.clone(),
        score: post.score,
        comments: post.comment_count,
        url: post.url.clone(),
        permalink: post.permalink.clone(),
        time: format_timestamp(post.created_utc),
        stickied: post.stickied,
        nsfw: post.nsfw,
    }
}

/// Transform a page of posts into list output with navigation commands
pub fn transform_posts(page: Page<Post>, query: &PostQuery) -> PostListOutput {
    let posts = page.items.iter().map(transform_post).collect();

    let next_page = page
        .after
        .as_ref()
        .map(|after| posts_command(query, "--after", after));
    let prev_page = page
        .before
        .as_ref()
        .map(|before| posts_command(query, "--before", before));

    PostListOutput {
        subreddits: query.subreddits().to_vec(),
        sort: query.sort_order().to_string(),
        timespan: query.options().timespan.map(|t| t.to_string()),
        posts,
        after: page.after,
        before: page.before,
        next_page_command: next_page,
        prev_page_command: prev_page,
    }
}

fn posts_command(query: &PostQuery, flag: &str, cursor: &str) -> String {
    let mut command = String::from("snoo posts");

    for subreddit in query.subreddits() {
        command.push(' ');
        command.push_str(subreddit);
    }

    command.push_str(&format!(" --sort {}", query.sort_order()));

    if let Some(timespan) = query.options().timespan {
        command.push_str(&format!(" --time {timespan}"));
    }
    if let Some(limit) = query.options().limit {
        command.push_str(&format!(" --limit {limit}"));
    }

    command.push_str(&format!(" {flag} {cursor}"));
    command
}

pub fn transform_subreddit(subreddit: &Subreddit) -> SubredditItem {
    SubredditItem {
        name: subreddit.name.clone(),
        full_id: subreddit.full_id.clone(),
        title: subreddit.title.clone(),
        description: subreddit.description.clone(),
        subscribers: subreddit.subscribers,
        active_users: subreddit.active_user_count,
        nsfw: subreddit.nsfw,
        url: subreddit.url.clone(),
        created: format_timestamp(subreddit.created_utc),
    }
}

/// Transform a page of subreddits into list output with navigation commands
pub fn transform_subreddits(
    page: Page<Subreddit>,
    list: SubredditList,
    limit: Option<u32>,
) -> SubredditListOutput {
    let command = |flag: &str, cursor: &str| {
        let mut command = format!("snoo subreddit list {list}");
        if let Some(limit) = limit {
            command.push_str(&format!(" --limit {limit}"));
        }
        command.push_str(&format!(" {flag} {cursor}"));
        command
    };

    SubredditListOutput {
        list: list.to_string(),
        subreddits: page.items.iter().map(transform_subreddit).collect(),
        next_page_command: page.after.as_ref().map(|a| command("--after", a)),
        prev_page_command: page.before.as_ref().map(|b| command("--before", b)),
        after: page.after,
        before: page.before,
    }
}

pub fn transform_comments(comments: &[Comment]) -> Vec<CommentItem> {
    comments
        .iter()
        .map(|c| CommentItem {
            id: c.id.clone(),
            author: c.author.clone(),
            time: format_timestamp(c.created_utc),
            body: c.body.clone(),
            score: c.score,
            replies_count: c.replies.len(),
        })
        .collect()
}

/// Build sticky output from a post and its comments
pub fn transform_sticky(subreddit: &str, slot: StickySlot, sticky: PostAndComments) -> StickyOutput {
    StickyOutput {
        subreddit: subreddit.to_string(),
        slot: slot.num(),
        post: sticky.post.as_ref().map(transform_post),
        body: sticky
            .post
            .as_ref()
            .map(|p| p.body.clone())
            .filter(|b| !b.is_empty()),
        comments: transform_comments(&sticky.comments),
        more_comments: sticky.more.as_ref().map(|m| m.count).unwrap_or(0),
    }
}

pub fn transform_subscription(
    action: SubscribeAction,
    targets: &[String],
    by_id: bool,
    status: u16,
) -> SubscriptionOutput {
    SubscriptionOutput {
        action: action.as_str().to_string(),
        by_id,
        subreddits: targets.to_vec(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::More;
    use crate::posts::{Sort, Timespan};

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: id.to_string(),
            full_id: format!("t3_{id}"),
            title: title.to_string(),
            author: "gopher".to_string(),
            subreddit_name: "golang".to_string(),
            score: 42,
            comment_count: 7,
            created_utc: Some(1609459200.0),
            ..Post::default()
        }
    }

    #[test]
    fn test_format_timestamp_valid() {
        let formatted = format_timestamp(Some(1609459200.0));
        assert_eq!(formatted, Some("2021-01-01 00:00:00 UTC".to_string()));
    }

    #[test]
    fn test_format_timestamp_fractional() {
        let formatted = format_timestamp(Some(1609459200.9));
        assert_eq!(formatted, Some("2021-01-01 00:00:00 UTC".to_string()));
    }

    #[test]
    fn test_format_timestamp_none() {
        assert_eq!(format_timestamp(None), None);
    }

    #[test]
    fn test_transform_post() {
        let item = transform_post(&post("abc", "Go 1.22 released"));

        assert_eq!(item.id, "abc");
        assert_eq!(item.full_id, "t3_abc");
        assert_eq!(item.title, "Go 1.22 released");
        assert_eq!(item.author, "gopher");
        assert_eq!(item.subreddit, "golang");
        assert_eq!(item.score, 42);
        assert_eq!(item.comments, 7);
        assert_eq!(item.time, Some("2021-01-01 00:00:00 UTC".to_string()));
    }

    #[test]
    fn test_transform_posts_keeps_order_and_cursors() {
        let page = Page {
            items: vec![post("a", "A"), post("b", "B"), post("c", "C")],
            after: Some("t3_c".to_string()),
            before: None,
        };
        let query = PostQuery::new().restrict_to(["golang"]).sort(Sort::New);

        let output = transform_posts(page, &query);

        let ids: Vec<&str> = output.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(output.subreddits, vec!["golang"]);
        assert_eq!(output.sort, "new");
        assert_eq!(output.after.as_deref(), Some("t3_c"));
        assert_eq!(
            output.next_page_command.as_deref(),
            Some("snoo posts golang --sort new --after t3_c")
        );
        assert!(output.prev_page_command.is_none());
    }

    #[test]
    fn test_transform_posts_commands_carry_options() {
        let page = Page {
            items: vec![post("a", "A")],
            after: Some("t3_a".to_string()),
            before: Some("t3_z".to_string()),
        };
        let query = PostQuery::new()
            .restrict_to(["golang", "rust"])
            .sort(Sort::Top)
            .timespan(Timespan::Week)
            .limit(10);

        let output = transform_posts(page, &query);

        assert_eq!(output.timespan.as_deref(), Some("week"));
        assert_eq!(
            output.next_page_command.as_deref(),
            Some("snoo posts golang rust --sort top --time week --limit 10 --after t3_a")
        );
        assert_eq!(
            output.prev_page_command.as_deref(),
            Some("snoo posts golang rust --sort top --time week --limit 10 --before t3_z")
        );
    }

    #[test]
    fn test_transform_posts_empty() {
        let output = transform_posts(Page::default(), &PostQuery::new());

        assert!(output.posts.is_empty());
        assert!(output.subreddits.is_empty());
        assert!(output.next_page_command.is_none());
        assert!(output.prev_page_command.is_none());
    }

    #[test]
    fn test_transform_subreddits() {
        let page = Page {
            items: vec![Subreddit {
                name: "golang".to_string(),
                full_id: "t5_2rc7j".to_string(),
                subscribers: 100,
                active_user_count: Some(4),
                ..Subreddit::default()
            }],
            after: Some("t5_2rc7j".to_string()),
            before: None,
        };

        let output = transform_subreddits(page, SubredditList::Popular, Some(5));

        assert_eq!(output.list, "popular");
        assert_eq!(output.subreddits.len(), 1);
        assert_eq!(output.subreddits[0].name, "golang");
        assert_eq!(output.subreddits[0].active_users, Some(4));
        assert_eq!(
            output.next_page_command.as_deref(),
            Some("snoo subreddit list popular --limit 5 --after t5_2rc7j")
        );
        assert!(output.prev_page_command.is_none());
    }

    #[test]
    fn test_transform_sticky() {
        let mut sticky_post = post("s1", "Weekly thread");
        sticky_post.body = "Ask anything".to_string();
        sticky_post.stickied = true;

        let sticky = PostAndComments {
            post: Some(sticky_post),
            comments: vec![Comment {
                id: "c1".to_string(),
                author: "user".to_string(),
                body: "hi".to_string(),
                replies: vec![Comment::default(), Comment::default()],
                ..Comment::default()
            }],
            more: Some(More {
                count: 9,
                ..More::default()
            }),
        };

        let output = transform_sticky("golang", StickySlot::Second, sticky);

        assert_eq!(output.slot, 2);
        assert_eq!(output.subreddit, "golang");
        assert!(output.post.as_ref().unwrap().stickied);
        assert_eq!(output.body.as_deref(), Some("Ask anything"));
        assert_eq!(output.comments.len(), 1);
        assert_eq!(output.comments[0].replies_count, 2);
        assert_eq!(output.more_comments, 9);
    }

    #[test]
    fn test_transform_sticky_empty_slot() {
        let output = transform_sticky("golang", StickySlot::First, PostAndComments::default());

        assert_eq!(output.slot, 1);
        assert!(output.post.is_none());
        assert!(output.body.is_none());
        assert!(output.comments.is_empty());
        assert_eq!(output.more_comments, 0);
    }

    #[test]
    fn test_transform_subscription() {
        let targets = vec!["t5_a".to_string(), "t5_b".to_string()];
        let output = transform_subscription(SubscribeAction::Unsubscribe, &targets, true, 200);

        assert_eq!(output.action, "unsub");
        assert!(output.by_id);
        assert_eq!(output.subreddits, targets);
        assert_eq!(output.status, 200);
    }
}
