use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-hash identifier for a question.
///
/// Derived from the question text alone, so re-importing the same bank
/// yields the same ids regardless of storage order or backend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn from_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        QuestionId(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
