//! Annotation field constants and validation.
//!
//! Validation runs at the API boundary before any storage write, so the
//! repository layer never sees an out-of-bounds title or description.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an annotation title, in UTF-8 bytes.
pub const MAX_TITLE_BYTES: usize = 256;

/// Maximum length of an annotation description, in UTF-8 bytes.
pub const MAX_DESCRIPTION_BYTES: usize = 256;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an annotation title.
///
/// Must be non-empty and at most [`MAX_TITLE_BYTES`] bytes. The bound is on
/// encoded byte length, not character count.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if title.len() > MAX_TITLE_BYTES {
        return Err(CoreError::Validation(format!(
            "title exceeds maximum length of {MAX_TITLE_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Validate an annotation description.
///
/// May be empty; at most [`MAX_DESCRIPTION_BYTES`] bytes.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_DESCRIPTION_BYTES {
        return Err(CoreError::Validation(format!(
            "description exceeds maximum length of {MAX_DESCRIPTION_BYTES} bytes"
        )));
    }
    Ok(())
}
