use serde::{Deserialize, Serialize};

/// A question/answer pair shown on the FAQ page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    // Free text, not a closed set.
    pub category: String,
}
