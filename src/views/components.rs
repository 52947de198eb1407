use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

/// htmx button that swaps its response into `main`.
pub fn swap_button(method: &str, href: &str, class: &str, disabled: bool, body: Markup) -> Markup {
    let (get, post) = match method {
        "post" => (None, Some(href)),
        _ => (Some(href), None),
    };
    html! {
        button type="button"
               class=(class)
               hx-get=[get]
               hx-post=[post]
               hx-target="main"
               hx-swap="innerHTML"
               disabled[disabled] {
            (body)
        }
    }
}

pub fn progress(current: usize, total: usize, locale: &str) -> Markup {
    let percent = if total == 0 {
        0
    } else {
        ((current + 1) as f64 / total as f64 * 100.0).round() as u32
    };
    let number = current + 1;
    html! {
        div class="quiz-progress" {
            div style="display: flex; justify-content: space-between;" {
                small {
                    (t!("quiz.question_of", locale = locale, current = number, total = total))
                }
                small { (t!("quiz.percent_complete", locale = locale, percent = percent)) }
            }
            progress value=(percent) max="100" {}
        }
    }
}

pub fn score_badge(score: u32, locale: &str) -> Markup {
    let class = if score >= names::HIGH_MATCH_SCORE {
        "score-badge score-high"
    } else if score >= names::MEDIUM_MATCH_SCORE {
        "score-badge score-medium"
    } else {
        "score-badge score-low"
    };
    html! {
        span class=(class) { (t!("results.match_percent", locale = locale, score = score)) }
    }
}
