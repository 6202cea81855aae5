//! Direct message endpoint DTO

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "to is required"))]
    pub to: String,

    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}
