use log::{debug, trace};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::finder::PostFinder;
use crate::subreddit::SubredditService;

/// Descriptor of an HTTP response, returned alongside every decoded result
/// and attached to errors raised after the service answered.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub url: String,
    pub headers: HeaderMap,
}

impl Response {
    fn from_reqwest(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            url: response.url().to_string(),
            headers: response.headers().clone(),
        }
    }
}

/// Reddit API client.
///
/// Cheap to clone: clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client with default headers (User-Agent and, when configured,
    /// a bearer token).
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.normalized_base_url())
            .map_err(|e| Error::Config(format!("Invalid base URL {}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("Invalid User-Agent: {e}")))?,
        );
        if let Some(token) = &config.access_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| Error::Config(format!("Invalid access token: {e}")))?,
            );
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Subreddit operations
    pub fn subreddits(&self) -> SubredditService<'_> {
        SubredditService::new(self)
    }

    /// A post finder with no subreddit restriction, sorted by hot.
    pub fn posts(&self) -> PostFinder<'_> {
        PostFinder::new(self)
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Request(format!("Invalid path {path}: {e}")))
    }

    /// Build a request for `path` (with any query string) relative to the base URL.
    pub fn new_request(&self, method: Method, path: &str) -> Result<reqwest::Request> {
        let url = self.resolve(path)?;
        self.http
            .request(method, url)
            .build()
            .map_err(|e| Error::Request(e.to_string()))
    }

    /// Build a request whose body is `form`, URL-encoded.
    pub fn new_request_with_form<F>(
        &self,
        method: Method,
        path: &str,
        form: &F,
    ) -> Result<reqwest::Request>
    where
        F: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        self.http
            .request(method, url)
            .form(form)
            .build()
            .map_err(|e| Error::Request(e.to_string()))
    }

    /// Send `request` and decode its JSON body into `T`.
    pub async fn send<T>(&self, ctx: &Context, request: reqwest::Request) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
    {
        let (response, body) = self.execute(ctx, request).await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(Error::Decode { source, response }),
        }
    }

    /// Send `request` and discard its body.
    pub async fn send_empty(&self, ctx: &Context, request: reqwest::Request) -> Result<Response> {
        let (response, _) = self.execute(ctx, request).await?;
        Ok(response)
    }

    async fn execute(&self, ctx: &Context, request: reqwest::Request) -> Result<(Response, String)> {
        let method = request.method().clone();
        let url = request.url().to_string();
        debug!("{method} {url}");

        let call = async {
            let response = self
                .http
                .execute(request)
                .await
                .map_err(|source| Error::Transport {
                    source,
                    response: None,
                })?;

            let descriptor = Response::from_reqwest(&response);
            debug!("{method} {url} -> {}", descriptor.status);

            let body = response.text().await.map_err(|source| Error::Transport {
                source,
                response: Some(descriptor.clone()),
            })?;
            trace!("{method} {url} body: {body}");

            if !descriptor.status.is_success() {
                return Err(Error::Api {
                    response: descriptor,
                    body,
                });
            }

            Ok((descriptor, body))
        };

        let result = ctx.run(call).await;
        if let Err(Error::Cancelled | Error::DeadlineExceeded) = &result {
            debug!("{method} {url} aborted");
        }
        result
    }
}
