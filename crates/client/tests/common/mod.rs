#![allow(dead_code)]

use serde_json::{json, Value};
use snoo_client::{Client, Config};
use wiremock::{MockServer, Request};

pub async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(&Config::default().with_base_url(server.uri())).expect("client build");
    (server, client)
}

pub async fn requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
}

pub fn post_json(id: &str, title: &str) -> Value {
    json!({
        "kind": "t3",
        "data": {
            "id": id,
            "name": format!("t3_{id}"),
            "title": title,
            "author": "gopher",
            "subreddit": "golang",
            "score": 10,
            "num_comments": 2,
            "created_utc": 1609459200.0
        }
    })
}

pub fn listing_json(children: Vec<Value>, after: Option<&str>, before: Option<&str>) -> Value {
    json!({
        "kind": "Listing",
        "data": {
            "children": children,
            "after": after,
            "before": before
        }
    })
}

pub fn subreddit_json(name: &str) -> Value {
    json!({
        "kind": "t5",
        "data": {
            "id": "2rc7j",
            "name": "t5_2rc7j",
            "display_name": name,
            "display_name_prefixed": format!("r/{name}"),
            "title": "The Go Programming Language",
            "subscribers": 210000,
            "over18": false,
            "url": format!("/r/{name}/")
        }
    })
}
