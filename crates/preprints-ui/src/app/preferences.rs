//! Persistence and environment helpers for the app shell.

use crate::core::config::AppConfig;
use crate::core::theme::{DEFAULT_THEME_ID, Theme};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const THEME_KEY: &str = "preprints.theme";
pub(crate) const LOCALE_KEY: &str = "preprints.locale";
pub(crate) const SERVER_ORIGIN_KEY: &str = "preprints.server_origin";
pub(crate) const API_BASE_URL_KEY: &str = "preprints.api_base_url";

pub(crate) fn load_theme() -> Theme {
    LocalStorage::get::<String>(THEME_KEY)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| Theme::new(DEFAULT_THEME_ID), Theme::new)
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        log_config_error("persist locale", &err.to_string());
    }
}

/// Build the runtime configuration from the page location and stored overrides.
pub(crate) fn load_config() -> AppConfig {
    let href = window().location().href().unwrap_or_default();
    let mut config = match AppConfig::for_location(&href) {
        Ok(config) => config,
        Err(err) => {
            log_config_error("location", &err.to_string());
            AppConfig::default()
        }
    };
    if let Ok(origin) = LocalStorage::get::<String>(SERVER_ORIGIN_KEY) {
        config = match config.clone().with_server_origin(&origin) {
            Ok(next) => next,
            Err(err) => {
                log_config_error(SERVER_ORIGIN_KEY, &err.to_string());
                config
            }
        };
    }
    if let Ok(base) = LocalStorage::get::<String>(API_BASE_URL_KEY) {
        config = config.with_api_base_url(&base);
    }
    config
}

fn log_config_error(source: &'static str, detail: &str) {
    console::error!("configuration fallback", source, detail);
}
