use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn locale_switcher(locale: &str) -> Markup {
    html! {
        form method="post" action=(names::SET_LOCALE_URL) hx-boost="true" style="margin: 0;" {
            select name="lang" onchange="this.form.requestSubmit()" aria-label="Language" {
                @for supported in names::SUPPORTED_LOCALES {
                    option value=(supported) selected[*supported == locale] {
                        (supported.to_uppercase())
                    }
                }
            }
        }
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { (t!("site.name", locale = locale)) }
                        }
                    }
                }
                ul {
                    li { (locale_switcher(locale)) }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn footer(locale: &str) -> Markup {
    html! {
        footer {
            small { (t!("site.responsible_gambling", locale = locale)) }
        }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (js())
                (icon())

                title { (title) " - " (t!("site.name", locale = locale)) }
            }

            body."container" {
                (header(locale))
                main { (body) }
                (footer(locale))
            }
        }
    }
}

pub fn titled(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        title { (title) " - " (t!("site.name", locale = locale)) }
        (body)
    }
}

/// Full page for direct navigation, fragment for htmx swaps into `main`.
pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body, locale)
    } else {
        page(title, body, locale)
    }
}
