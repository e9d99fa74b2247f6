use crate::types::Question;

/// Read-only boundary to the external question store. The core never
/// mutates this collaborator; persistence format is the caller's concern.
pub trait QuestionBank {
    /// Questions whose keywords relate to any of the given skills, up to
    /// `limit`. An empty result is valid; the selector falls back to the
    /// whole bank.
    fn by_skills(&self, skills: &[String], limit: usize) -> Vec<Question>;

    /// Every question in the bank.
    fn all(&self) -> Vec<Question>;
}

/// In-memory bank for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    questions: Vec<Question>,
}

impl InMemoryBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionBank for InMemoryBank {
    fn by_skills(&self, skills: &[String], limit: usize) -> Vec<Question> {
        let lowered: Vec<String> = skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if lowered.is_empty() {
            return Vec::new();
        }

        self.questions
            .iter()
            .filter(|q| {
                // substring containment in either direction, so "react"
                // matches "react.js" and vice versa; the pre-normalized
                // token cache catches split phrase parts
                let keyword_hit = q.keywords.iter().any(|k| {
                    let k = k.to_lowercase();
                    lowered.iter().any(|s| k.contains(s) || s.contains(&k))
                });
                let token_hit = q
                    .tokens
                    .iter()
                    .any(|t| lowered.iter().any(|s| t.contains(s.as_str()) || s.contains(t.as_str())));
                keyword_hit || token_hit
            })
            .take(limit)
            .cloned()
            .collect()
    }

    fn all(&self) -> Vec<Question> {
        self.questions.clone()
    }
}
