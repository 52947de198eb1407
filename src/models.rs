use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Informational grouping of a question; never read by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Games,
    Bonuses,
    Payments,
    Mobile,
    Experience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub mode: SelectionMode,
    pub category: QuestionCategory,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.mode == SelectionMode::Multiple
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
    pub tags: Vec<String>,
    /// Carried for forward compatibility; every matched option counts the same.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_options: Vec<String>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, selected: &[&str]) -> Self {
        Self {
            question_id: question_id.into(),
            selected_options: selected.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A rankable casino, flattened from the content source's record shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Casino {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub rating: f64,
    pub bonus_amount: String,
    pub free_spins: String,
    pub no_deposit: bool,
    pub fast_payouts: bool,
    pub is_new: bool,
    pub website_url: String,
    /// `None` means nobody authored tags for this casino; an empty list is an
    /// authored (empty) tag set.
    pub tags: Option<Vec<String>>,
}

impl Casino {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Fills in derived tags when none were authored.
    pub fn with_derived_tags(mut self) -> Self {
        if self.tags.is_none() {
            self.tags = Some(crate::matcher::derive_tags(&self));
        }
        self
    }
}
