//! Preference matching: scores casinos against quiz answers and ranks them.
//!
//! Everything here is pure. Unknown question or option ids are skipped, an
//! empty answer list scores 0, and ranking empty input yields no results.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{
    catalog::QuestionCatalog,
    models::{Answer, Casino},
};

const GAME_TYPE_TAGS: [&str; 3] = ["slots", "table_games", "live_casino"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub casino: &'a Casino,
    /// Percentage of answers that matched, 0 to 100.
    pub match_score: u32,
    pub matched_criteria: Vec<String>,
    pub recommendation_reason: String,
}

/// Scores one casino by the share of answers whose picked options overlap its tags.
pub fn score_entity<'a>(
    casino: &'a Casino,
    answers: &[Answer],
    catalog: &QuestionCatalog,
) -> MatchResult<'a> {
    let casino_tags: Vec<String> = casino.tags().iter().map(|t| t.to_lowercase()).collect();
    let mut matched_criteria = Vec::new();

    for answer in answers {
        let Some(question) = catalog.get(&answer.question_id) else {
            continue;
        };
        for option_id in &answer.selected_options {
            let Some(option) = question.option(option_id) else {
                continue;
            };
            let overlaps = option
                .tags
                .iter()
                .any(|tag| casino_tags.contains(&tag.to_lowercase()));
            if overlaps {
                matched_criteria.push(option.label.clone());
            }
        }
    }

    let match_count = matched_criteria.len();
    let match_score = percentage(match_count, answers.len());
    let recommendation_reason = reason(&casino.name, &matched_criteria, catalog.len());

    MatchResult {
        casino,
        match_score,
        matched_criteria,
        recommendation_reason,
    }
}

/// Scores every casino and returns at most `limit` results, best first.
///
/// Ties on score are broken by rating; casinos tied on both keep their input
/// order.
pub fn rank_entities<'a>(
    casinos: &'a [Casino],
    answers: &[Answer],
    catalog: &QuestionCatalog,
    limit: usize,
) -> Vec<MatchResult<'a>> {
    if casinos.is_empty() || answers.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<_> = casinos
        .iter()
        .map(|casino| score_entity(casino, answers, catalog))
        .collect();

    results.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| by_rating_desc(a.casino, b.casino))
    });
    results.truncate(limit);

    tracing::debug!(
        candidates = casinos.len(),
        answers = answers.len(),
        returned = results.len(),
        "ranked casinos"
    );

    results
}

/// Placeholder tagging for casinos that arrive without authored tags.
pub fn derive_tags(casino: &Casino) -> Vec<String> {
    let id = casino.id as usize;
    let mut tags = vec![GAME_TYPE_TAGS[id % GAME_TYPE_TAGS.len()].to_string()];

    tags.push("cad".to_string());
    if id % 3 == 0 {
        tags.push("cryptocurrency".to_string());
    }
    if id % 2 == 0 {
        tags.push("any_currency".to_string());
    }

    if casino.no_deposit {
        tags.push("no_deposit_bonus".to_string());
    }
    if !casino.bonus_amount.is_empty() {
        tags.push("welcome_bonus".to_string());
    }
    if id % 4 == 0 {
        tags.push("any_bonus".to_string());
    }

    tags
}

fn by_rating_desc(a: &Casino, b: &Casino) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn percentage(matched: usize, answered: usize) -> u32 {
    if answered == 0 {
        return 0;
    }
    let pct = (matched as f64 / answered as f64 * 100.0).round() as u32;
    // multiple-choice answers can match more than once
    pct.min(100)
}

fn reason(name: &str, criteria: &[String], catalog_size: usize) -> String {
    match criteria.len() {
        0 => format!("{name} is a solid choice with high ratings and great features."),
        n if n >= catalog_size => format!(
            "Perfect match! {name} meets all your preferences: {}.",
            criteria.join(", ")
        ),
        n if n + 1 == catalog_size => format!(
            "Great match! {name} aligns with most of your preferences: {}.",
            criteria.join(", ")
        ),
        _ => format!(
            "Good option! {name} matches your preference for {}.",
            criteria[0]
        ),
    }
}
