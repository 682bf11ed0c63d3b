//! Shared `{"message": string}` response body.

use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Message { message: text.into() }
    }
}
