use std::fmt;

use crate::{
    catalog::QuestionCatalog,
    models::{Answer, Question},
};

/// Answers collected during one quiz run, at most one per question, in the
/// order the questions were first answered.
///
/// Stored client-side in a cookie as `games:slots&currency:cad`, with several
/// options of a multiple-choice question joined by `+`. The cookie is client
/// input, so it is only ever read back through [`AnswerSheet::decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click on `option_id`.
    ///
    /// Single-choice questions keep only the latest pick, multiple-choice
    /// questions toggle the option in or out. Options that do not belong to
    /// `question` are ignored and `false` is returned.
    pub fn select(&mut self, question: &Question, option_id: &str) -> bool {
        if question.option(option_id).is_none() {
            return false;
        }

        let Some(answer) = self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question.id)
        else {
            self.answers.push(Answer::new(&question.id, &[option_id]));
            return true;
        };

        if !question.is_multiple_choice() {
            answer.selected_options = vec![option_id.to_string()];
        } else if let Some(pos) = answer.selected_options.iter().position(|o| o == option_id) {
            answer.selected_options.remove(pos);
        } else {
            answer.selected_options.push(option_id.to_string());
        }
        true
    }

    pub fn selected(&self, question_id: &str) -> &[String] {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.selected_options.as_slice())
            .unwrap_or_default()
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        !self.selected(question_id).is_empty()
    }

    /// Index of the first catalog question without a selection.
    pub fn first_unanswered(&self, catalog: &QuestionCatalog) -> Option<usize> {
        catalog.iter().position(|q| !self.is_answered(&q.id))
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        self.first_unanswered(catalog).is_none()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Parses the cookie form against `catalog`.
    ///
    /// Every entry is replayed as if the options had been picked in order, so
    /// unknown questions and options are dropped and a single-choice question
    /// keeps only its last option. A question appearing twice keeps its last
    /// entry.
    pub fn decode(raw: &str, catalog: &QuestionCatalog) -> Self {
        let mut sheet = Self::new();
        for entry in raw.split('&') {
            let Some((question_id, options)) = entry.split_once(':') else {
                continue;
            };
            let Some(question) = catalog.get(question_id) else {
                continue;
            };

            sheet.answers.retain(|a| a.question_id != question.id);
            for option_id in options.split('+').filter(|o| !o.is_empty()) {
                if !sheet.selected(&question.id).iter().any(|o| o == option_id) {
                    sheet.select(question, option_id);
                }
            }
        }
        sheet
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnswerSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, answer) in self.answers.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}:{}", answer.question_id, answer.selected_options.join("+"))?;
        }
        Ok(())
    }
}
