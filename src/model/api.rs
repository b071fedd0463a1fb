use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// A single chat message as shown in the dashboard's message pane.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageDto {
    pub author: String,
    pub content: String,
}

/// Body of `POST /messages/send`.
///
/// `text` is optional so that a missing field produces the same 400 response as a blank one
/// instead of an extractor rejection.
#[derive(Serialize, Deserialize, Default)]
pub struct SendMessageDto {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SendStatusDto {
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct ShutdownDto {
    pub success: bool,
    pub message: String,
}
