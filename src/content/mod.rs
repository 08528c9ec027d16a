//! Blog content: WordPress-shaped post records and a fail-soft client.
//!
//! The journal pages render whatever this module hands them. Every
//! failure mode — no base URL configured, network unreachable, non-2xx
//! status, malformed payload — degrades to an empty result with a logged
//! warning; nothing here ever returns an error to a caller. "Post not
//! found" is simply `None`.

use serde::Deserialize;

/// Environment variable consulted when no content base URL is configured.
pub const CONTENT_API_ENV: &str = "CONTENT_API_URL";

/// A blog post in display-ready shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// URL slug of the post.
    pub slug: String,
    /// Rendered title HTML.
    pub title: String,
    /// Rendered body HTML.
    pub content: String,
    /// Rendered excerpt HTML.
    pub excerpt: String,
    /// URL of the embedded featured image, when present.
    pub featured_image: Option<String>,
}

// Wire shape of the WordPress REST v2 posts endpoint (`?_embed`).
#[derive(Debug, Deserialize)]
struct WpPost {
    slug: String,
    #[serde(default)]
    title: WpRendered,
    #[serde(default)]
    content: WpRendered,
    #[serde(default)]
    excerpt: WpRendered,
    #[serde(rename = "_embedded", default)]
    embedded: WpEmbedded,
}

#[derive(Debug, Deserialize, Default)]
struct WpRendered {
    #[serde(default)]
    rendered: String,
}

#[derive(Debug, Deserialize, Default)]
struct WpEmbedded {
    #[serde(rename = "wp:featuredmedia", default)]
    featured_media: Vec<WpMedia>,
}

#[derive(Debug, Deserialize)]
struct WpMedia {
    #[serde(default)]
    source_url: String,
}

impl From<WpPost> for Post {
    fn from(raw: WpPost) -> Self {
        let featured_image = raw
            .embedded
            .featured_media
            .into_iter()
            .map(|media| media.source_url)
            .find(|url| !url.is_empty());
        Self {
            slug: raw.slug,
            title: raw.title.rendered,
            content: raw.content.rendered,
            excerpt: raw.excerpt.rendered,
            featured_image,
        }
    }
}

/// Parse a posts-endpoint JSON body. Malformed input yields `None`.
#[must_use]
pub fn parse_posts(body: &str) -> Option<Vec<Post>> {
    serde_json::from_str::<Vec<WpPost>>(body)
        .ok()
        .map(|posts| posts.into_iter().map(Post::from).collect())
}

#[cfg(feature = "content")]
mod client {
    use web_time::Duration;

    use super::{parse_posts, Post, CONTENT_API_ENV};
    use crate::options::ContentOptions;

    /// Read-only client for the posts API.
    ///
    /// Construct once per process; the underlying agent pools
    /// connections.
    pub struct ContentClient {
        base_url: Option<String>,
        agent: ureq::Agent,
    }

    impl ContentClient {
        /// A client for an explicit API base URL, e.g.
        /// `https://blog.example.com`.
        pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
            Self {
                base_url: Some(base_url.into()),
                agent: build_agent(timeout),
            }
        }

        /// A client configured from options, falling back to the
        /// `CONTENT_API_URL` environment variable. With neither set the
        /// client stays permanently empty-handed and each fetch logs a
        /// warning.
        #[must_use]
        pub fn from_options(options: &ContentOptions) -> Self {
            let base_url = options
                .api_base_url
                .clone()
                .or_else(|| std::env::var(CONTENT_API_ENV).ok())
                .filter(|url| !url.is_empty());
            if base_url.is_none() {
                log::warn!(
                    "no content API base URL configured ({CONTENT_API_ENV} unset); the journal will be empty"
                );
            }
            Self {
                base_url,
                agent: build_agent(options.timeout()),
            }
        }

        /// Fetch all posts, in API order. Any failure yields an empty
        /// list.
        #[must_use]
        pub fn posts(&self) -> Vec<Post> {
            let Some(base) = &self.base_url else {
                log::warn!("content API not configured; returning no posts");
                return Vec::new();
            };
            let url = format!("{base}/wp-json/wp/v2/posts?_embed");
            let Some(body) = self.fetch(&url) else {
                return Vec::new();
            };
            parse_posts(&body).unwrap_or_else(|| {
                log::warn!("malformed posts payload from {url}");
                Vec::new()
            })
        }

        /// Fetch one post by slug. Absence and failure are both `None`.
        #[must_use]
        pub fn post_by_slug(&self, slug: &str) -> Option<Post> {
            let Some(base) = &self.base_url else {
                log::warn!("content API not configured; post lookup skipped");
                return None;
            };
            let url =
                format!("{base}/wp-json/wp/v2/posts?slug={slug}&_embed");
            let body = self.fetch(&url)?;
            let posts = parse_posts(&body).or_else(|| {
                log::warn!("malformed post payload from {url}");
                None
            })?;
            posts.into_iter().next()
        }

        fn fetch(&self, url: &str) -> Option<String> {
            match self.agent.get(url).call() {
                Ok(response) => {
                    match response.into_body().read_to_string() {
                        Ok(body) => Some(body),
                        Err(e) => {
                            log::warn!(
                                "failed to read content response from {url}: {e}"
                            );
                            None
                        }
                    }
                }
                Err(e) => {
                    log::warn!("content fetch failed for {url}: {e}");
                    None
                }
            }
        }
    }

    fn build_agent(timeout: Duration) -> ureq::Agent {
        ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into()
    }
}

#[cfg(feature = "content")]
pub use client::ContentClient;

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {
            "slug": "perfect-crema",
            "title": { "rendered": "The Perfect Crema" },
            "content": { "rendered": "<p>Pressure and patience.</p>" },
            "excerpt": { "rendered": "<p>Pressure.</p>" },
            "_embedded": {
                "wp:featuredmedia": [
                    { "source_url": "https://cdn.example.com/crema.jpg" }
                ]
            }
        },
        {
            "slug": "bean-origins",
            "title": { "rendered": "Bean Origins" },
            "content": { "rendered": "<p>From farm to hopper.</p>" },
            "excerpt": { "rendered": "" }
        }
    ]"#;

    #[test]
    fn parses_embedded_posts() {
        let Some(posts) = parse_posts(FIXTURE) else {
            unreachable!("fixture must parse");
        };
        assert_eq!(posts.len(), 2);

        let first = &posts[0];
        assert_eq!(first.slug, "perfect-crema");
        assert_eq!(first.title, "The Perfect Crema");
        assert_eq!(
            first.featured_image.as_deref(),
            Some("https://cdn.example.com/crema.jpg")
        );
    }

    #[test]
    fn missing_embeds_leave_no_featured_image() {
        let Some(posts) = parse_posts(FIXTURE) else {
            unreachable!("fixture must parse");
        };
        assert_eq!(posts[1].featured_image, None);
        assert_eq!(posts[1].excerpt, "");
    }

    #[test]
    fn malformed_payloads_parse_to_none() {
        assert!(parse_posts("not json").is_none());
        assert!(parse_posts("{\"not\": \"an array\"}").is_none());
    }

    #[test]
    fn empty_feed_parses_to_an_empty_list() {
        let Some(posts) = parse_posts("[]") else {
            unreachable!("empty array must parse");
        };
        assert!(posts.is_empty());
    }
}
