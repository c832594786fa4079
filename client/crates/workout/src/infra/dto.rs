//! Wire Types

use serde::Deserialize;

/// `POST /submit` response
///
/// A missing `hash` decodes as empty.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub hash: String,
}
