#![allow(dead_code)]

use axum::{body::Body, http::Response};
use casinomatch::{catalog::QuestionCatalog, models::Casino, router, AppState};

pub fn casino(id: u32, name: &str, rating: f64, tags: &[&str]) -> Casino {
    Casino {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        short_description: String::new(),
        rating,
        bonus_amount: "C$500".to_string(),
        free_spins: "50 Free Spins".to_string(),
        no_deposit: false,
        fast_payouts: true,
        is_new: false,
        website_url: format!("https://example.com/{id}"),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

pub fn sample_casinos() -> Vec<Casino> {
    vec![
        casino(1, "Northern Lights", 4.0, &["slots", "cad", "welcome_bonus"]),
        casino(2, "Maple Spins", 3.0, &["cad", "welcome_bonus"]),
        casino(3, "Hab Jackpot", 5.0, &["slots"]),
        casino(4, "Prairie Poker", 2.0, &["table_games"]),
        casino(5, "Harbour Live", 4.5, &["slots", "cad"]),
    ]
}

pub fn app_with(casinos: Vec<Casino>) -> axum::Router {
    router(AppState::new(QuestionCatalog::standard(), casinos))
}

pub fn app() -> axum::Router {
    app_with(sample_casinos())
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
