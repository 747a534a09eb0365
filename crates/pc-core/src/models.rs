//! # Payload Models
//!
//! Each submission exists twice: as an `*Input` straight off the wire, where
//! every field may be absent, and as an accepted `*Payload` once it has
//! passed validation. Both serialize to the same JSON shape.

use serde::{Deserialize, Serialize};

/// Hard ceiling for a post caption, in characters.
pub const CAPTION_MAX_CHARS: usize = 500;

/// Hard ceiling for a comment body, in characters.
pub const COMMENT_MAX_CHARS: usize = 200;

/// A post as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub caption: Option<String>,
    /// URL or media identifier; never inspected
    #[serde(default)]
    pub image: Option<String>,
}

/// A post that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A comment as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub text: String,
}

/// A share request: the recipients a post is being sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInput {
    #[serde(default)]
    pub shared_with: Option<Vec<String>>,
}

/// A share with at least one recipient, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub shared_with: Vec<String>,
}

impl From<PostPayload> for PostInput {
    fn from(payload: PostPayload) -> Self {
        Self {
            caption: Some(payload.caption),
            image: payload.image,
        }
    }
}

impl From<CommentPayload> for CommentInput {
    fn from(payload: CommentPayload) -> Self {
        Self {
            text: Some(payload.text),
        }
    }
}

impl From<SharePayload> for ShareInput {
    fn from(payload: SharePayload) -> Self {
        Self {
            shared_with: Some(payload.shared_with),
        }
    }
}
