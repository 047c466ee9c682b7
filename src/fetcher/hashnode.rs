use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::app::{Result, TributaryError};
use crate::fetcher::{PostSource, RawPost};

pub const HASHNODE_ENDPOINT: &str = "https://gql.hashnode.com";

const POSTS_QUERY: &str = r#"
query PublicationPosts($host: String!, $first: Int!) {
  publication(host: $host) {
    posts(first: $first) {
      edges {
        node {
          id
          title
          brief
          slug
          url
          publishedAt
          coverImage { url }
          author { name username }
          tags { name slug }
          readTimeInMinutes
        }
      }
    }
  }
}
"#;

pub struct HashnodeSource {
    client: Client,
    endpoint: Url,
}

impl HashnodeSource {
    pub fn new() -> Self {
        let endpoint = Url::parse(HASHNODE_ENDPOINT).expect("Invalid Hashnode endpoint");
        Self::with_endpoint(endpoint)
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("tributary/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }
}

impl Default for HashnodeSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostSource for HashnodeSource {
    async fn fetch_posts(&self, host: &str, count: u32) -> Result<Vec<RawPost>> {
        let payload = serde_json::json!({
            "query": POSTS_QUERY,
            "variables": { "host": host, "first": count },
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(TributaryError::SourceUnreachable)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(TributaryError::SourceUnreachable)?;

        if !status.is_success() {
            return Err(TributaryError::SourceRejected(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        decode_response(&body, host)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    publication: Option<Publication>,
}

#[derive(Debug, Deserialize)]
struct Publication {
    posts: Option<PostConnection>,
}

#[derive(Debug, Deserialize)]
struct PostConnection {
    edges: Vec<PostEdge>,
}

#[derive(Debug, Deserialize)]
struct PostEdge {
    node: RawPost,
}

/// Decode a GraphQL response body into raw posts.
///
/// A non-empty `errors` array is fatal even alongside partial data, and a
/// missing publication object means the host does not resolve to a
/// publication.
pub fn decode_response(body: &str, host: &str) -> Result<Vec<RawPost>> {
    let parsed: GraphqlResponse = serde_json::from_str(body)
        .map_err(|e| TributaryError::SourceRejected(format!("malformed response: {}", e)))?;

    if let Some(errors) = parsed.errors {
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(TributaryError::SourceRejected(messages.join("; ")));
        }
    }

    let publication = parsed
        .data
        .and_then(|d| d.publication)
        .ok_or_else(|| TributaryError::PublicationMissing(host.to_string()))?;

    Ok(publication
        .posts
        .map(|p| p.edges.into_iter().map(|e| e.node).collect())
        .unwrap_or_default())
}
