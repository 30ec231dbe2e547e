//! LinkedIn request payloads
//!
//! Shapes the relay sends upstream: the OAuth token exchange form and the
//! UGC share post.

use serde::Serialize;
use serde_json::Value;

/// Fixed article card attached to every share
pub const ARTICLE_TITLE: &str = "Official LinkedIn Blog";
pub const ARTICLE_DESCRIPTION: &str =
    "Official LinkedIn Blog - Your source for insights and information about LinkedIn.";
pub const ARTICLE_URL: &str = "https://blog.linkedin.com/";

/// Authorization-code exchange fields supplied by the caller
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenExchangeForm {
    pub code: String,
    pub redirect_uri: String,
    pub client_id: String,
    pub client_secret: String,
}

impl TokenExchangeForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// The first occurrence of each field wins; absent fields stay empty.
    pub fn parse(body: &[u8]) -> Self {
        let mut form = Self::default();
        let mut seen = [false; 4];
        for (key, value) in url::form_urlencoded::parse(body) {
            let (idx, field) = match &*key {
                "code" => (0, &mut form.code),
                "redirect_uri" => (1, &mut form.redirect_uri),
                "client_id" => (2, &mut form.client_id),
                "client_secret" => (3, &mut form.client_secret),
                _ => continue,
            };
            if !seen[idx] {
                seen[idx] = true;
                *field = value.into_owned();
            }
        }
        form
    }

    /// Form pairs for the token endpoint, in the order LinkedIn documents them
    pub fn upstream_pairs(&self) -> [(&str, &str); 5] {
        [
            ("grant_type", "authorization_code"),
            ("code", &self.code),
            ("redirect_uri", &self.redirect_uri),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
        ]
    }
}

#[derive(Debug, Serialize)]
struct Text<T> {
    text: T,
}

/// UGC share post
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    author: String,
    lifecycle_state: &'static str,
    specific_content: SpecificContent,
    visibility: Visibility,
}

#[derive(Debug, Serialize)]
struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShareContent {
    share_commentary: Text<Value>,
    share_media_category: &'static str,
    media: Vec<Media>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Media {
    status: &'static str,
    description: Text<&'static str>,
    original_url: &'static str,
    title: Text<&'static str>,
}

#[derive(Debug, Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network: &'static str,
}

impl UgcPost {
    /// Public, published article share authored by `urn:li:person:<sub>`
    pub fn article_share(sub: &Value, commentary: Value) -> Self {
        let person = match sub {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self {
            author: format!("urn:li:person:{person}"),
            lifecycle_state: "PUBLISHED",
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: Text { text: commentary },
                    share_media_category: "ARTICLE",
                    media: vec![Media {
                        status: "READY",
                        description: Text {
                            text: ARTICLE_DESCRIPTION,
                        },
                        original_url: ARTICLE_URL,
                        title: Text {
                            text: ARTICLE_TITLE,
                        },
                    }],
                },
            },
            visibility: Visibility {
                member_network: "PUBLIC",
            },
        }
    }
}
