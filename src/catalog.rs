use crate::models::{Question, QuestionCategory, QuizOption, SelectionMode};

/// The fixed, ordered set of quiz questions.
///
/// Built once at startup and handed to the handlers through `AppState`.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Games, currency and bonus preferences, in that order.
    pub fn standard() -> Self {
        Self::new(vec![
            single(
                "games",
                "What type of games do you prefer?",
                QuestionCategory::Games,
                &[
                    ("slots", "Slots", "slots"),
                    ("table_games", "Table Games", "table_games"),
                    ("live_casino", "Live Casino", "live_casino"),
                ],
            ),
            single(
                "currency",
                "Which currency do you prefer to use?",
                QuestionCategory::Payments,
                &[
                    ("cad", "Canadian Dollar (CAD)", "cad"),
                    ("crypto", "Cryptocurrency", "cryptocurrency"),
                    ("doesnt_matter", "Doesn't matter", "any_currency"),
                ],
            ),
            single(
                "bonuses",
                "What kind of bonuses are most important to you?",
                QuestionCategory::Bonuses,
                &[
                    ("no_deposit", "No Deposit Bonus", "no_deposit_bonus"),
                    ("welcome_bonus", "Welcome Bonus", "welcome_bonus"),
                    ("not_important", "Not important", "any_bonus"),
                ],
            ),
        ])
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn at(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn single(
    id: &str,
    prompt: &str,
    category: QuestionCategory,
    options: &[(&str, &str, &str)],
) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        mode: SelectionMode::Single,
        category,
        options: options
            .iter()
            .map(|(id, label, tag)| QuizOption {
                id: id.to_string(),
                label: label.to_string(),
                tags: vec![tag.to_string()],
                weight: Some(1),
            })
            .collect(),
    }
}
