mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use casinomatch::names;
use tower::ServiceExt;

const ALL_MATCHING: &str = "games:slots&currency:cad&bonuses:welcome_bonus";

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed")
}

fn get_with_answers(uri: &str, answers: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(
            header::COOKIE,
            format!("{}={answers}", names::ANSWERS_COOKIE_NAME),
        )
        .body(Body::empty())
        .expect("request build should succeed")
}

fn htmx_post(uri: &str, answers: Option<&str>) -> Request<Body> {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("HX-Request", "true");
    if let Some(answers) = answers {
        req = req.header(
            header::COOKIE,
            format!("{}={answers}", names::ANSWERS_COOKIE_NAME),
        );
    }
    req.body(Body::empty())
        .expect("request build should succeed")
}

fn set_cookie(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn start_page_renders_intro() {
    let resp = common::app().oneshot(get("/")).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(resp).await;
    assert!(body.contains("Discover Your Perfect Casino"));
    assert!(body.contains("Start Assessment"));
}

#[tokio::test]
async fn state_changing_requests_require_htmx_header() {
    let app = common::app();

    for uri in ["/start", "/restart", "/question/0/select/slots"] {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");
        let resp = app.clone().oneshot(req).await.expect("router should respond");

        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "expected FORBIDDEN for {uri}");
    }
}

#[tokio::test]
async fn starting_clears_previous_answers() {
    let resp = common::app()
        .oneshot(htmx_post(names::START_URL, Some(ALL_MATCHING)))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(set_cookie(&resp).starts_with("quiz_answers=;"));
    let body = common::body_text(resp).await;
    assert!(body.contains("What type of games do you prefer?"));
    assert!(body.contains("Question 1 of 3"));
}

#[tokio::test]
async fn selecting_an_option_updates_the_answers_cookie() {
    let resp = common::app()
        .oneshot(htmx_post("/question/1/select/crypto", Some("games:slots")))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(set_cookie(&resp).starts_with("quiz_answers=games:slots&currency:crypto;"));
    let body = common::body_text(resp).await;
    assert!(body.contains("quiz-option selected"));
    assert!(body.contains("Which currency do you prefer to use?"));
}

#[tokio::test]
async fn single_choice_selection_replaces_previous_pick() {
    let resp = common::app()
        .oneshot(htmx_post("/question/0/select/live_casino", Some("games:slots")))
        .await
        .expect("router should respond");

    assert!(set_cookie(&resp).starts_with("quiz_answers=games:live_casino;"));
}

#[tokio::test]
async fn unknown_option_is_rejected() {
    let resp = common::app()
        .oneshot(htmx_post("/question/0/select/cad", None))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn question_outside_catalog_is_not_found() {
    let resp = common::app()
        .oneshot(get("/question/3"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn results_rank_by_score_then_rating() {
    let resp = common::app()
        .oneshot(get_with_answers(names::RESULTS_URL, ALL_MATCHING))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(resp).await;

    let northern = body.find("Northern Lights").expect("best match listed");
    let harbour = body.find("Harbour Live").expect("second match listed");
    let maple = body.find("Maple Spins").expect("third match listed");
    assert!(northern < harbour && harbour < maple);
    assert!(!body.contains("Hab Jackpot"));
    assert!(body.contains(
        "Perfect match! Northern Lights meets all your preferences: Slots, Canadian Dollar (CAD), Welcome Bonus."
    ));
    assert!(body.contains("Best Match"));
    assert!(body.contains("C$500 + 50 Free Spins"));
}

#[tokio::test]
async fn results_ignore_questions_outside_catalog() {
    let resp = common::app()
        .oneshot(get_with_answers(
            names::RESULTS_URL,
            &format!("{ALL_MATCHING}&mobile:yes"),
        ))
        .await
        .expect("router should respond");

    let body = common::body_text(resp).await;
    assert!(body.contains("Perfect match! Northern Lights"));
    assert!(body.contains("100% Match"));
    assert!(!body.contains("75% Match"));
}

#[tokio::test]
async fn results_keep_last_option_of_single_choice_question() {
    let resp = common::app()
        .oneshot(get_with_answers(
            names::RESULTS_URL,
            "games:slots+table_games&currency:cad&bonuses:welcome_bonus",
        ))
        .await
        .expect("router should respond");

    let body = common::body_text(resp).await;
    assert!(body.contains("Great match! Northern Lights"));
    assert!(!body.contains("Perfect match!"));
    assert!(!body.contains("100% Match"));
}

#[tokio::test]
async fn selecting_drops_unknown_entries_from_cookie() {
    let resp = common::app()
        .oneshot(htmx_post(
            "/question/1/select/cad",
            Some("games:slots+live_casino&mobile:yes"),
        ))
        .await
        .expect("router should respond");

    assert!(set_cookie(&resp).starts_with("quiz_answers=games:live_casino&currency:cad;"));
}

#[tokio::test]
async fn results_respect_configured_limit() {
    let mut state = casinomatch::AppState::new(
        casinomatch::catalog::QuestionCatalog::standard(),
        common::sample_casinos(),
    );
    state.result_limit = 1;
    let resp = casinomatch::router(state)
        .oneshot(get_with_answers(names::RESULTS_URL, ALL_MATCHING))
        .await
        .expect("router should respond");

    let body = common::body_text(resp).await;
    assert!(body.contains("Northern Lights"));
    assert!(!body.contains("Harbour Live"));
}

#[tokio::test]
async fn incomplete_answers_resume_first_unanswered_question() {
    let resp = common::app()
        .oneshot(get_with_answers(names::RESULTS_URL, "games:slots&bonuses:no_deposit"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(resp).await;
    assert!(body.contains("Which currency do you prefer to use?"));
    assert!(!body.contains("Best Match"));
}

#[tokio::test]
async fn results_without_any_overlap_show_no_matches() {
    let casinos = vec![common::casino(1, "Quiet Room", 4.9, &[])];
    let resp = common::app_with(casinos)
        .oneshot(get_with_answers(names::RESULTS_URL, ALL_MATCHING))
        .await
        .expect("router should respond");

    let body = common::body_text(resp).await;
    assert!(body.contains("No Perfect Matches Found"));
    assert!(!body.contains("Quiet Room"));
}

#[tokio::test]
async fn restart_returns_to_start_and_clears_answers() {
    let resp = common::app()
        .oneshot(htmx_post(names::RESTART_URL, Some(ALL_MATCHING)))
        .await
        .expect("router should respond");

    assert!(set_cookie(&resp).starts_with("quiz_answers=;"));
    let body = common::body_text(resp).await;
    assert!(body.contains("Start Assessment"));
}

#[tokio::test]
async fn accept_language_selects_french() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9,en;q=0.5")
        .body(Body::empty())
        .expect("request build should succeed");
    let resp = common::app().oneshot(req).await.expect("router should respond");

    let body = common::body_text(resp).await;
    assert!(body.contains("Commencer"));
}

#[tokio::test]
async fn static_stylesheet_is_served() {
    let resp = common::app()
        .oneshot(get("/static/index.css"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(&b"text/css"[..])
    );
}
