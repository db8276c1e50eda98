use crate::error::ContentError;

pub const MIN_CONTENT_CHARS: usize = 10;
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Check a recipe body.
///
/// Emptiness and the minimum length are measured on the trimmed text; the
/// maximum is measured on the text as received.
pub fn validate_content(content: &str) -> Result<(), ContentError> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Err(ContentError::Empty);
    }

    if trimmed.chars().count() < MIN_CONTENT_CHARS {
        return Err(ContentError::TooShort);
    }

    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ContentError::TooLong);
    }

    Ok(())
}
