use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, warn};
use uuid::Uuid;

/// The `{message}` envelope used for both translations and errors.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleEntry {
    pub locale: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locales {
    pub locales: Vec<LocaleEntry>,
    pub message: String,
}

/// Locales the server knows about and the phrases it can translate.
///
/// Subjects without a phrase entry are echoed back unchanged, which is what
/// the service does for its source locale.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub default_locale: String,
    pub locales: Vec<LocaleEntry>,
    pub phrases: HashMap<(String, String), String>,
}

impl Catalog {
    pub fn new(default_locale: &str) -> Self {
        Self {
            default_locale: default_locale.to_string(),
            locales: Vec::new(),
            phrases: HashMap::new(),
        }
    }

    pub fn with_locale(mut self, locale: &str, name: &str) -> Self {
        self.locales.push(LocaleEntry {
            locale: locale.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_phrase(mut self, locale: &str, subject: &str, translation: &str) -> Self {
        self.phrases.insert(
            (locale.to_string(), subject.to_string()),
            translation.to_string(),
        );
        self
    }

    fn supports(&self, locale: &str) -> bool {
        self.locales.iter().any(|entry| entry.locale == locale)
    }

    fn translate(&self, locale: &str, subject: &str) -> String {
        self.phrases
            .get(&(locale.to_string(), subject.to_string()))
            .cloned()
            .unwrap_or_else(|| subject.to_string())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new("en")
            .with_locale("en", "English")
            .with_locale("fr", "Français")
            .with_locale("de", "Deutsch")
            .with_locale("ja", "日本語")
            .with_phrase("fr", "Hello", "Bonjour")
            .with_phrase("fr", "Hello World", "Bonjour le monde")
            .with_phrase("de", "Hello", "Hallo")
            .with_phrase("ja", "Hello", "こんにちは")
    }
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(Catalog::default())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(catalog);
    Router::new()
        .route("/translate/{origin}/{subject}", get(translate))
        .route("/locales", get(list_locales))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn reply(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Message>) {
    (
        status,
        Json(Message {
            message: message.into(),
        }),
    )
}

async fn translate(
    State(db): State<Db>,
    Path((origin, subject)): Path<(String, String)>,
    Query(params): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<Message>) {
    if Uuid::parse_str(&origin).is_err() {
        warn!(%origin, "rejecting request with invalid origin");
        return reply(StatusCode::BAD_REQUEST, "invalid origin identifier");
    }

    let mut locale = db.default_locale.clone();
    for (key, value) in params {
        // Filter values arrive path-safe encoded inside the query encoding.
        let value = match urlencoding::decode(&value) {
            Ok(value) => value.into_owned(),
            Err(e) => {
                return reply(StatusCode::BAD_REQUEST, format!("invalid filter value: {e}"));
            }
        };
        match key.as_str() {
            "locale" => locale = value,
            "origin" => {}
            other => return reply(StatusCode::BAD_REQUEST, format!("unknown filter: {other}")),
        }
    }

    if !db.supports(&locale) {
        return reply(StatusCode::NOT_FOUND, "unsupported language");
    }

    debug!(%origin, %locale, %subject, "translating");
    reply(StatusCode::OK, db.translate(&locale, &subject))
}

async fn list_locales(State(db): State<Db>) -> Json<Locales> {
    let locales = db
        .locales
        .iter()
        .map(|entry| LocaleEntry {
            locale: urlencoding::encode(&entry.locale).into_owned(),
            name: urlencoding::encode(&entry.name).into_owned(),
        })
        .collect();
    Json(Locales {
        locales,
        message: String::new(),
    })
}
