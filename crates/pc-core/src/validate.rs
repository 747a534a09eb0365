//! # Payload Validation
//!
//! Field-presence and length rules for posts, comments and shares.
//! Lengths are counted in characters, and whitespace counts like any other
//! character. Accepted text is returned exactly as submitted.

use crate::error::{Result, ValidationError};
use crate::models::{
    CommentInput, CommentPayload, PostInput, PostPayload, ShareInput, SharePayload,
    CAPTION_MAX_CHARS, COMMENT_MAX_CHARS,
};
use crate::traits::Validate;

/// Validates a post submission. `image` is accepted as-is, empty included.
pub fn validate_post(input: &PostInput) -> Result<PostPayload> {
    let caption = check_text("caption", input.caption.as_deref(), CAPTION_MAX_CHARS)?;
    Ok(PostPayload {
        caption,
        image: input.image.clone(),
    })
}

pub fn validate_comment(input: &CommentInput) -> Result<CommentPayload> {
    let text = check_text("text", input.text.as_deref(), COMMENT_MAX_CHARS)?;
    Ok(CommentPayload { text })
}

/// Validates a share submission. An absent list is treated as empty.
pub fn validate_share(input: &ShareInput) -> Result<SharePayload> {
    match input.shared_with.as_deref() {
        Some(recipients) if !recipients.is_empty() => Ok(SharePayload {
            shared_with: recipients.to_vec(),
        }),
        _ => Err(ValidationError::new(
            "sharedWith",
            "at least one recipient required",
        )),
    }
}

/// Required text in `[1, max]` characters.
fn check_text(field: &'static str, value: Option<&str>, max: usize) -> Result<String> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ValidationError::missing(field)),
    };
    // stop counting at max + 1
    if value.chars().nth(max).is_some() {
        return Err(ValidationError::too_long(field));
    }
    Ok(value.to_owned())
}

impl Validate for PostInput {
    type Output = PostPayload;

    fn validate(&self) -> Result<PostPayload> {
        validate_post(self)
    }
}

impl Validate for CommentInput {
    type Output = CommentPayload;

    fn validate(&self) -> Result<CommentPayload> {
        validate_comment(self)
    }
}

impl Validate for ShareInput {
    type Output = SharePayload;

    fn validate(&self) -> Result<SharePayload> {
        validate_share(self)
    }
}
