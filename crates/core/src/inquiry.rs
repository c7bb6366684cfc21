//! Contact-form inquiry record.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Collection discriminator under which inquiries are stored in the
/// document store.
pub const INQUIRY_COLLECTION: &str = "inquiry";

/// A contact-form submission from the website.
///
/// Write-once: accepted submissions are handed to the document store and
/// never read back or mutated by this service. Validation is structural
/// only (required fields present and non-empty, email-shaped email).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Inquiry {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}
