pub const START_URL: &str = "/start";
pub const RESTART_URL: &str = "/restart";
pub const RESULTS_URL: &str = "/results";
pub const SET_LOCALE_URL: &str = "/set-locale";

pub const ANSWERS_COOKIE_NAME: &str = "quiz_answers";

pub fn question_url(question_idx: usize) -> String {
    format!("/question/{question_idx}")
}

pub fn select_option_url(question_idx: usize, option_id: &str) -> String {
    format!("/question/{question_idx}/select/{option_id}")
}

// Results
pub const DEFAULT_RESULT_LIMIT: usize = 3;
pub const HIGH_MATCH_SCORE: u32 = 67;
pub const MEDIUM_MATCH_SCORE: u32 = 34;

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "fr"];
