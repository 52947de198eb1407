use maud::{html, Markup};
use rust_i18n::t;

use crate::{matcher::MatchResult, models::Question, names, views::components};

pub struct QuestionData<'a> {
    pub question: &'a Question,
    pub question_idx: usize,
    pub questions_count: usize,
    pub selected: &'a [String],
}

impl QuestionData<'_> {
    fn is_answered(&self) -> bool {
        !self.selected.is_empty()
    }

    fn is_last(&self) -> bool {
        self.question_idx + 1 == self.questions_count
    }
}

pub fn start_page(questions_count: usize, result_limit: usize, locale: &str) -> Markup {
    html! {
        article class="quiz-start" {
            h2 { (t!("quiz.start_title", locale = locale)) }
            p { (t!("quiz.start_lead", locale = locale)) }

            div class="quiz-facts" {
                div {
                    strong { (questions_count) }
                    small { (t!("quiz.fact_questions", locale = locale)) }
                }
                div {
                    strong { "1" }
                    small { (t!("quiz.fact_minute", locale = locale)) }
                }
                div {
                    strong { (result_limit) }
                    small { (t!("quiz.fact_matches", locale = locale)) }
                }
            }

            (components::swap_button(
                "post",
                names::START_URL,
                "",
                false,
                html! { (t!("quiz.start_button", locale = locale)) },
            ))
        }
    }
}

pub fn question(data: QuestionData, locale: &str) -> Markup {
    html! {
        article class="quiz-question" {
            (components::progress(data.question_idx, data.questions_count, locale))

            h3 { (data.question.prompt) }

            div class="quiz-options" {
                @for opt in &data.question.options {
                    @let is_selected = data.selected.contains(&opt.id);
                    button type="button"
                           class=(if is_selected { "quiz-option selected" } else { "quiz-option outline" })
                           aria-pressed=(is_selected)
                           hx-post=(names::select_option_url(data.question_idx, &opt.id))
                           hx-target="main"
                           hx-swap="innerHTML" {
                        (opt.label)
                    }
                }
            }

            @if data.question.is_multiple_choice() {
                p class="quiz-hint" { (t!("quiz.multiple_hint", locale = locale)) }
            }

            div style="display: flex; gap: 1rem; margin-top: 1rem; align-items: center;" {
                (components::swap_button(
                    "get",
                    &names::question_url(data.question_idx.saturating_sub(1)),
                    "secondary",
                    data.question_idx == 0,
                    html! { (t!("quiz.back", locale = locale)) },
                ))
                span style="margin-left: auto;" {
                    @if data.is_last() {
                        (components::swap_button(
                            "get",
                            names::RESULTS_URL,
                            "",
                            !data.is_answered(),
                            html! { (t!("quiz.get_results", locale = locale)) },
                        ))
                    } @else {
                        (components::swap_button(
                            "get",
                            &names::question_url(data.question_idx + 1),
                            "",
                            !data.is_answered(),
                            html! { (t!("quiz.next", locale = locale)) },
                        ))
                    }
                }
            }
        }
    }
}

pub fn results(results: &[MatchResult<'_>], locale: &str) -> Markup {
    let has_matches = results.iter().any(|r| r.match_score > 0);
    if !has_matches {
        return no_matches(locale);
    }
    let count = results.len();

    html! {
        header class="quiz-results-header" {
            h2 { (t!("results.title", locale = locale)) }
            p { (t!("results.lead", locale = locale, count = count)) }
        }

        @for (rank, result) in results.iter().enumerate() {
            article class="quiz-result" {
                @if rank == 0 {
                    span class="best-match" { (t!("results.best_match", locale = locale)) }
                }
                div style="display: flex; gap: 1rem; align-items: flex-start;" {
                    div style="flex: 1;" {
                        h4 { (result.casino.name) }
                        p { (result.recommendation_reason) }
                        p {
                            small { (t!("results.match_score", locale = locale)) " " }
                            (components::score_badge(result.match_score, locale))
                        }
                    }
                    div style="text-align: right;" {
                        p { strong { (result.casino.rating) "/5" } }
                        a href=(result.casino.website_url)
                          role="button"
                          target="_blank"
                          rel="noopener noreferrer" {
                            (t!("results.play_now", locale = locale))
                        }
                    }
                }
                @if !result.casino.bonus_amount.is_empty() {
                    footer {
                        small { (t!("results.welcome_bonus", locale = locale)) " " }
                        strong {
                            (result.casino.bonus_amount)
                            @if !result.casino.free_spins.is_empty() {
                                " + " (result.casino.free_spins)
                            }
                        }
                    }
                }
            }
        }

        (restart_button(locale))
    }
}

fn no_matches(locale: &str) -> Markup {
    html! {
        article class="quiz-no-matches" {
            h3 { (t!("results.none_title", locale = locale)) }
            p { (t!("results.none_lead", locale = locale)) }
        }
        (restart_button(locale))
    }
}

fn restart_button(locale: &str) -> Markup {
    components::swap_button(
        "post",
        names::RESTART_URL,
        "secondary",
        false,
        html! { (t!("results.retake", locale = locale)) },
    )
}
