//! Subreddit related methods of the Reddit API.
//!
//! Reddit API docs: <https://www.reddit.com/dev/api/#section_subreddits>

use log::debug;
use reqwest::Method;
use snoo_core::envelope::{
    Listing, ModeratorList, PostAndComments, RandomListing, SubredditInfoList, SubredditNames,
    Thing,
};
use snoo_core::models::{Moderator, Page, Subreddit, SubredditInfo};
use snoo_core::query::{add_options, path_segment, ListOptions};
use snoo_core::subreddit::{
    about_path, moderators_path, random_path, sticky_path, RandomQuery, SearchQuery, StickyQuery,
    StickySlot, SubredditList, SubscribeAction, SubscriptionForm, SEARCH_NAMES_PATH, SEARCH_PATH,
    SUBSCRIBE_PATH,
};

use crate::client::{Client, Response};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::finder::PostFinder;

/// Handles the subreddit endpoints. Obtained from [`Client::subreddits`].
#[derive(Debug, Clone, Copy)]
pub struct SubredditService<'a> {
    client: &'a Client,
}

impl<'a> SubredditService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Hot posts from r/all. Refine the search through the returned finder.
    ///
    /// Hot listings of a subreddit include its sticky posts on top of the
    /// requested limit.
    pub fn get_posts(&self) -> PostFinder<'a> {
        PostFinder::new(self.client).from_all()
    }

    /// Get a subreddit by name. `None` when the service returns no data.
    ///
    /// Whitespace around `name` is ignored. Names that are not a single path
    /// segment (containing `/`, `?`, `#`, `%` or `\`, or `.`/`..`) fail with
    /// [`Error::Validation`].
    pub async fn get(&self, ctx: &Context, name: &str) -> Result<(Option<Subreddit>, Response)> {
        let name = required("name", name)?;

        let request = self.client.new_request(Method::GET, &about_path(name))?;
        let (root, response): (Thing<Subreddit>, _) = self.client.send(ctx, request).await?;

        Ok((root.into_data(), response))
    }

    pub async fn get_popular(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::Popular, opts).await
    }

    pub async fn get_new(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::New, opts).await
    }

    pub async fn get_gold(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::Gold, opts).await
    }

    pub async fn get_default(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::Default, opts).await
    }

    /// Subreddits the client is subscribed to.
    pub async fn get_subscribed(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::Subscribed, opts).await
    }

    /// Subreddits the client is an approved user in.
    pub async fn get_approved(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::Approved, opts).await
    }

    /// Subreddits the client is a moderator of.
    pub async fn get_moderated(
        &self,
        ctx: &Context,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        self.list(ctx, SubredditList::Moderated, opts).await
    }

    /// Fetch any of the subreddit listings.
    pub async fn list(
        &self,
        ctx: &Context,
        list: SubredditList,
        opts: &ListOptions,
    ) -> Result<(Page<Subreddit>, Response)> {
        let path = add_options(list.path(), opts)?;

        let request = self.client.new_request(Method::GET, &path)?;
        let (root, response): (Listing<Subreddit>, _) = self.client.send(ctx, request).await?;

        Ok((root.into_page(), response))
    }

    /// Subscribe to subreddits by name.
    pub async fn subscribe<S: AsRef<str>>(&self, ctx: &Context, names: &[S]) -> Result<Response> {
        required_list("subreddits", names)?;
        let form = SubscriptionForm::by_name(SubscribeAction::Subscribe, names);
        self.handle_subscription(ctx, &form).await
    }

    /// Subscribe to subreddits by fullname (`t5_...`).
    pub async fn subscribe_by_id<S: AsRef<str>>(&self, ctx: &Context, ids: &[S]) -> Result<Response> {
        required_list("ids", ids)?;
        let form = SubscriptionForm::by_id(SubscribeAction::Subscribe, ids);
        self.handle_subscription(ctx, &form).await
    }

    /// Unsubscribe from subreddits by name.
    pub async fn unsubscribe<S: AsRef<str>>(&self, ctx: &Context, names: &[S]) -> Result<Response> {
        required_list("subreddits", names)?;
        let form = SubscriptionForm::by_name(SubscribeAction::Unsubscribe, names);
        self.handle_subscription(ctx, &form).await
    }

    /// Unsubscribe from subreddits by fullname (`t5_...`).
    pub async fn unsubscribe_by_id<S: AsRef<str>>(
        &self,
        ctx: &Context,
        ids: &[S],
    ) -> Result<Response> {
        required_list("ids", ids)?;
        let form = SubscriptionForm::by_id(SubscribeAction::Unsubscribe, ids);
        self.handle_subscription(ctx, &form).await
    }

    async fn handle_subscription(&self, ctx: &Context, form: &SubscriptionForm) -> Result<Response> {
        debug!("{} request", form.action().as_str());
        let request = self
            .client
            .new_request_with_form(Method::POST, SUBSCRIBE_PATH, form)?;
        self.client.send_empty(ctx, request).await
    }

    /// Subreddits whose names begin with `query`, with subscriber counts.
    pub async fn search(&self, ctx: &Context, query: &str) -> Result<(Vec<SubredditInfo>, Response)> {
        let request =
            self.client
                .new_request_with_form(Method::POST, SEARCH_PATH, &SearchQuery { query })?;
        let (root, response): (SubredditInfoList, _) = self.client.send(ctx, request).await?;

        Ok((root.into_subreddits(), response))
    }

    /// Names of the subreddits beginning with `query`.
    pub async fn search_names(&self, ctx: &Context, query: &str) -> Result<(Vec<String>, Response)> {
        let path = add_options(SEARCH_NAMES_PATH, &SearchQuery { query })?;

        let request = self.client.new_request(Method::GET, &path)?;
        let (root, response): (SubredditNames, _) = self.client.send(ctx, request).await?;

        Ok((root.into_names(), response))
    }

    /// The first sticky post of a subreddit and its comments.
    pub async fn get_sticky1(&self, ctx: &Context, name: &str) -> Result<(PostAndComments, Response)> {
        self.get_sticky(ctx, name, StickySlot::First).await
    }

    /// The second sticky post of a subreddit and its comments.
    pub async fn get_sticky2(&self, ctx: &Context, name: &str) -> Result<(PostAndComments, Response)> {
        self.get_sticky(ctx, name, StickySlot::Second).await
    }

    /// One of the two sticky posts. An empty slot is reported by the service.
    ///
    /// `name` is checked as in [`SubredditService::get`].
    pub async fn get_sticky(
        &self,
        ctx: &Context,
        name: &str,
        slot: StickySlot,
    ) -> Result<(PostAndComments, Response)> {
        let name = required("name", name)?;
        let path = add_options(&sticky_path(name), &StickyQuery::from(slot))?;

        let request = self.client.new_request(Method::GET, &path)?;
        self.client.send(ctx, request).await
    }

    /// Moderators of a subreddit, in the order the service lists them.
    ///
    /// `name` is checked as in [`SubredditService::get`].
    pub async fn moderators(&self, ctx: &Context, name: &str) -> Result<(Vec<Moderator>, Response)> {
        let name = required("name", name)?;

        let request = self.client.new_request(Method::GET, &moderators_path(name))?;
        let (root, response): (ModeratorList, _) = self.client.send(ctx, request).await?;

        Ok((root.into_moderators(), response))
    }

    /// A random SFW subreddit.
    pub async fn random(&self, ctx: &Context) -> Result<(Option<Subreddit>, Response)> {
        self.random_pick(ctx, false).await
    }

    /// A random NSFW subreddit.
    pub async fn random_nsfw(&self, ctx: &Context) -> Result<(Option<Subreddit>, Response)> {
        self.random_pick(ctx, true).await
    }

    async fn random_pick(&self, ctx: &Context, nsfw: bool) -> Result<(Option<Subreddit>, Response)> {
        let path = add_options(random_path(nsfw), &RandomQuery::default())?;

        let request = self.client.new_request(Method::GET, &path)?;
        let (root, response): (RandomListing, _) = self.client.send(ctx, request).await?;

        Ok((root.into_subreddit(), response))
    }
}

/// Surrounding whitespace is dropped; what remains must be one path segment.
fn required<'s>(field: &str, value: &'s str) -> Result<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{field}: must not be empty")));
    }
    Ok(path_segment(trimmed)?)
}

fn required_list<S: AsRef<str>>(field: &str, values: &[S]) -> Result<()> {
    if values.is_empty() || values.iter().any(|v| v.as_ref().trim().is_empty()) {
        return Err(Error::Validation(format!(
            "{field}: must contain at least one non-empty value"
        )));
    }
    Ok(())
}
