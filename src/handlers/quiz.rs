use axum::{
    extract::{Form, Path, State},
    http::{
        header::{HeaderValue, SET_COOKIE},
        HeaderMap,
    },
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    answers::AnswerSheet,
    extractors::{match_supported_locale, IsHtmx, Locale, QuizAnswers},
    matcher, names,
    rejections::{AppError, ResultExt},
    utils, views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(start_page))
        .route(names::START_URL, post(start_quiz))
        .route(names::RESTART_URL, post(restart_quiz))
        .route("/question/{question_idx}", get(question_page))
        .route(
            "/question/{question_idx}/select/{option_id}",
            post(select_option),
        )
        .route(names::RESULTS_URL, get(results_page))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

async fn start_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Markup {
    start(&state, is_htmx, &locale)
}

async fn start_quiz(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    tracing::debug!("starting a new quiz run");
    let page = question(&state, &AnswerSheet::new(), 0, is_htmx, &locale)?;
    Ok((clear_answers_cookie()?, page).into_response())
}

async fn restart_quiz(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let page = start(&state, is_htmx, &locale);
    Ok((clear_answers_cookie()?, page).into_response())
}

async fn question_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    QuizAnswers(sheet): QuizAnswers,
    Path(question_idx): Path<usize>,
) -> Result<Markup, AppError> {
    question(&state, &sheet, question_idx, is_htmx, &locale)
}

async fn select_option(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    QuizAnswers(mut sheet): QuizAnswers,
    Path((question_idx, option_id)): Path<(usize, String)>,
) -> Result<Response, AppError> {
    let current = state.catalog.at(question_idx).ok_or(AppError::NotFound)?;

    if !sheet.select(current, &option_id) {
        return Err(AppError::Input("unknown option"));
    }
    tracing::debug!(
        "question '{}' now has {:?}",
        current.id,
        sheet.selected(&current.id)
    );

    let page = question(&state, &sheet, question_idx, is_htmx, &locale)?;
    Ok((answers_cookie(&state, &sheet)?, page).into_response())
}

async fn results_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    QuizAnswers(sheet): QuizAnswers,
) -> Result<Markup, AppError> {
    if let Some(question_idx) = sheet.first_unanswered(&state.catalog) {
        return question(&state, &sheet, question_idx, is_htmx, &locale);
    }

    let results = matcher::rank_entities(
        &state.casinos,
        sheet.answers(),
        &state.catalog,
        state.result_limit,
    );
    tracing::info!(
        "quiz finished with {} recommendation(s), best score {}",
        results.len(),
        results.first().map_or(0, |r| r.match_score)
    );

    Ok(views::render(
        is_htmx,
        &t!("results.title", locale = &locale),
        quiz_views::results(&results, &locale),
        &locale,
    ))
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(
    State(state): State<AppState>,
    Form(body): Form<SetLocaleBody>,
) -> Result<Response, AppError> {
    let locale =
        match_supported_locale(&body.lang).ok_or(AppError::Input("unsupported locale"))?;
    let cookie = utils::cookie(names::LOCALE_COOKIE_NAME, locale, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).reject("could not build locale cookie")?,
    );
    Ok((headers, Redirect::to("/")).into_response())
}

fn start(state: &AppState, is_htmx: bool, locale: &str) -> Markup {
    views::render(
        is_htmx,
        &t!("quiz.start_title", locale = locale),
        quiz_views::start_page(state.catalog.len(), state.result_limit, locale),
        locale,
    )
}

fn question(
    state: &AppState,
    sheet: &AnswerSheet,
    question_idx: usize,
    is_htmx: bool,
    locale: &str,
) -> Result<Markup, AppError> {
    let question = state.catalog.at(question_idx).ok_or(AppError::NotFound)?;
    let data = quiz_views::QuestionData {
        question,
        question_idx,
        questions_count: state.catalog.len(),
        selected: sheet.selected(&question.id),
    };
    Ok(views::render(
        is_htmx,
        &question.prompt,
        quiz_views::question(data, locale),
        locale,
    ))
}

fn answers_cookie(state: &AppState, sheet: &AnswerSheet) -> Result<HeaderMap, AppError> {
    let cookie = utils::cookie(
        names::ANSWERS_COOKIE_NAME,
        &sheet.encode(),
        state.secure_cookies,
    );
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).reject_input("answers do not fit in a cookie")?,
    );
    Ok(headers)
}

fn clear_answers_cookie() -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&utils::expired_cookie(names::ANSWERS_COOKIE_NAME))
            .reject("could not build answers cookie")?,
    );
    Ok(headers)
}
