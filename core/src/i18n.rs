use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::GalleryError;
use crate::locale::Locale;

pub const TITLE_FALLBACK: &str = "Kristina amigurumi";
pub const SUBTITLE_FALLBACK: &str = "crocheted toys — handmade";
pub const DOCUMENT_TITLE_SUFFIX: &str = " — Галерея";
pub const LOAD_ERROR_FALLBACK: &str = "Ошибка загрузки галереи";

/// Localized UI strings keyed by dotted path (`ui.theme_light`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl StringTable {
    pub fn from_json(url: &str, raw: &str) -> Result<Self, GalleryError> {
        let value: Value = serde_json::from_str(raw).map_err(|source| GalleryError::Json {
            url: url.to_string(),
            source,
        })?;
        let mut table = Self::default();
        if let Value::Object(map) = value {
            for (key, child) in map {
                table.collect(key, child);
            }
        }
        Ok(table)
    }

    /// Objects whose values are all strings are locale maps; other objects
    /// are namespaces.
    fn collect(&mut self, path: String, value: Value) {
        let Value::Object(map) = value else {
            return;
        };
        if map.values().all(Value::is_string) {
            let texts = map
                .into_iter()
                .filter_map(|(code, text)| text.as_str().map(|text| (code, text.to_string())))
                .collect();
            self.entries.insert(path, texts);
            return;
        }
        for (key, child) in map {
            self.collect(format!("{path}.{key}"), child);
        }
    }

    pub fn get(&self, key: &str, locale: Locale) -> Option<&str> {
        self.entries
            .get(key)?
            .get(locale.code())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn text<'a>(&'a self, key: &str, locale: Locale, fallback: &'a str) -> &'a str {
        self.get(key, locale).unwrap_or(fallback)
    }
}

/// Photo captions: `key -> locale -> title`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PhotoTitles {
    titles: HashMap<String, HashMap<String, String>>,
}

impl PhotoTitles {
    pub fn from_json(url: &str, raw: &str) -> Result<Self, GalleryError> {
        serde_json::from_str(raw).map_err(|source| GalleryError::Json {
            url: url.to_string(),
            source,
        })
    }

    /// Localized title, or the photo key itself.
    pub fn caption<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.titles
            .get(key)
            .and_then(|texts| texts.get(locale.code()))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(key)
    }
}

/// Texts derived from the string table for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteTexts {
    pub title: String,
    pub subtitle: String,
    pub document_title: String,
    pub footer_line1: Option<String>,
    pub footer_line2: Option<String>,
}

pub fn site_texts(strings: &StringTable, locale: Locale, year: i32) -> SiteTexts {
    let title = strings.text("title", locale, TITLE_FALLBACK).to_string();
    SiteTexts {
        subtitle: strings.text("subtitle", locale, SUBTITLE_FALLBACK).to_string(),
        document_title: format!("{title}{DOCUMENT_TITLE_SUFFIX}"),
        footer_line1: strings.get("footer_line1", locale).map(str::to_string),
        footer_line2: strings
            .get("footer_line2", locale)
            .map(|line| line.replace("{year}", &year.to_string())),
        title,
    }
}
