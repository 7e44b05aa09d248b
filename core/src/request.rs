//! Request builder and client for the translation service.
//!
//! # Design
//! A `Request` is configured through consuming `with_*` calls, each of which
//! hands back a new value, so two call chains never share mutable state.
//! Every query is split the same way: `build_*` produces an `HttpRequest`,
//! the configured `Transport` executes it, and `parse_*` interprets the
//! `HttpResponse`. `get`, `localise` and `get_locales` glue the three steps
//! together and log each of them.

use std::fmt;
use std::sync::Arc;

use url::{Host, Url};
use uuid::Uuid;

use crate::codec;
use crate::error::{ConfigError, Failure, InputError, TranslateError};
use crate::filter::{Filter, FilterKey};
use crate::http::{HttpRequest, HttpResponse};
use crate::logging::{LogLevel, Logger, TracingLogger};
use crate::origin;
use crate::transport::{Transport, UreqTransport};
use crate::types::{ApiResponse, Locale, LocaleResponse, Response};

pub type TranslateResult = Result<Response, Failure<Response>>;
pub type LocalesResult = Result<LocaleResponse, Failure<LocaleResponse>>;

static DEFAULT_LOGGER: TracingLogger = TracingLogger;

#[derive(Clone)]
pub struct Request {
    protocol: String,
    host: String,
    port: u16,
    origin: Option<Uuid>,
    filters: Vec<Filter>,
    logger: Option<Arc<dyn Logger>>,
    logging: bool,
    transport: Arc<dyn Transport>,
    locales_require_endpoint: bool,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            protocol: String::new(),
            host: String::new(),
            port: 0,
            origin: None,
            filters: Vec::new(),
            logger: None,
            logging: true,
            transport: Arc::new(UreqTransport::new()),
            locales_require_endpoint: true,
        }
    }
}

impl Request {
    /// An unconfigured request with logging on and the default transport.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Derive the origin identifier from a caller-chosen name.
    pub fn from_origin(mut self, payload: &str) -> Result<Self, TranslateError> {
        self.origin = Some(origin::derive(payload)?);
        Ok(self)
    }

    pub fn with_origin(mut self, origin: Uuid) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Append a filter. Earlier filters with the same key are kept.
    pub fn with_filter(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.filters.push(Filter::new(key, value));
        self
    }

    /// Append a filter whose key comes in as a string.
    pub fn try_with_filter(self, key: &str, value: impl Into<String>) -> Result<Self, TranslateError> {
        let key: FilterKey = key.parse()?;
        Ok(self.with_filter(key, value))
    }

    /// Set the locale filter, replacing any locale filters already attached.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.filters.retain(|filter| filter.key() != FilterKey::Locale);
        self.with_filter(FilterKey::Locale, locale)
    }

    /// Send log lines to `logger` instead of `tracing`, and turn logging on.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self.logging = true;
        self
    }

    pub fn enable_logging(mut self) -> Self {
        self.logging = true;
        self
    }

    pub fn disable_logging(mut self) -> Self {
        self.logging = false;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Whether `get_locales` checks protocol, host and port before building
    /// its URL. On by default.
    pub fn require_endpoint_for_locales(mut self, required: bool) -> Self {
        self.locales_require_endpoint = required;
        self
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn origin(&self) -> Option<Uuid> {
        self.origin
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_logging(&self) -> bool {
        self.logging
    }

    pub fn validate_endpoint(&self) -> Result<(), TranslateError> {
        if self.protocol.is_empty() {
            return Err(TranslateError::from(ConfigError::ProtocolRequired));
        }
        if self.host.is_empty() {
            return Err(TranslateError::from(ConfigError::HostRequired));
        }
        if self.port == 0 {
            return Err(TranslateError::from(ConfigError::PortRequired));
        }
        Ok(())
    }

    /// Check configuration before input: protocol, host, port, origin, then
    /// the subject. Stops at the first problem.
    pub fn validate(&self, subject: &str) -> Result<(), TranslateError> {
        self.validate_endpoint()?;
        if self.origin.is_none() {
            return Err(TranslateError::from(ConfigError::OriginRequired));
        }
        if subject.is_empty() {
            return Err(TranslateError::from(InputError::EmptySubject));
        }
        Ok(())
    }

    pub fn build_translate_request(&self, subject: &str) -> Result<HttpRequest, TranslateError> {
        let origin = self.origin.map(|id| id.to_string()).unwrap_or_default();
        let subject = codec::encode(subject);
        let target = format!(
            "{}://{}:{}/translate/{}/{}",
            self.protocol, self.host, self.port, origin, subject
        );
        let mut url = self.parse_url(&target, &["translate", origin.as_str(), subject.as_str()])?;

        if !self.filters.is_empty() {
            let mut query = url.query_pairs_mut();
            for filter in &self.filters {
                query.append_pair(filter.key().as_str(), &codec::encode(filter.value()));
            }
        }

        Ok(HttpRequest::get(url))
    }

    pub fn build_locales_request(&self) -> Result<HttpRequest, TranslateError> {
        let target = format!("{}://{}:{}/locales", self.protocol, self.host, self.port);
        Ok(HttpRequest::get(self.parse_url(&target, &["locales"])?))
    }

    /// Parse a templated URL and check that every configured part ended up
    /// where the template put it. A host containing `#`, `?` or `/` would
    /// otherwise parse fine and silently move the rest into another component.
    fn parse_url(&self, target: &str, segments: &[&str]) -> Result<Url, TranslateError> {
        let malformed = |reason: String| TranslateError::UrlConstruction(format!("{target}: {reason}"));

        let url = Url::parse(target).map_err(|e| malformed(e.to_string()))?;
        let host = Host::parse(&self.host)
            .map_err(|e| malformed(format!("invalid host {:?}: {e}", self.host)))?;

        if !url.scheme().eq_ignore_ascii_case(&self.protocol) {
            return Err(malformed(format!("invalid protocol {:?}", self.protocol)));
        }
        if url.host().map(|h| h.to_owned()) != Some(host) {
            return Err(malformed(format!("invalid host {:?}", self.host)));
        }
        if url.port_or_known_default() != Some(self.port) {
            return Err(malformed(format!("port {} was not kept", self.port)));
        }
        let path: Option<Vec<&str>> = url.path_segments().map(|parts| parts.collect());
        if path.as_deref() != Some(segments) || url.query().is_some() || url.fragment().is_some() {
            return Err(malformed("unexpected path, query or fragment".to_string()));
        }

        Ok(url)
    }

    /// Interpret the service's answer to a translation request for `subject`.
    pub fn parse_translation(&self, subject: &str, response: HttpResponse) -> TranslateResult {
        let envelope: ApiResponse = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                let encoded = codec::encode(subject);
                let error = TranslateError::Decode(e.to_string());
                let partial = Response {
                    original: encoded.clone(),
                    translated: encoded,
                    information: error.to_string(),
                };
                return Err(self.fail(partial, error));
            }
        };

        if !response.is_ok() {
            let error = TranslateError::Remote {
                status: response.status,
                message: envelope.message.clone(),
            };
            return Err(self.fail(Response::failed(envelope.message), error));
        }

        let translated = Response {
            original: subject.to_string(),
            translated: envelope.message,
            information: String::new(),
        };
        self.log(
            LogLevel::Info,
            &format!(
                "translated {:?} to {:?}",
                translated.original, translated.translated
            ),
        );
        Ok(translated)
    }

    /// Interpret the service's answer to a locales request, decoding every
    /// returned field from its path-safe form.
    pub fn parse_locales(&self, response: HttpResponse) -> LocalesResult {
        let decode_failure = |e: serde_json::Error| {
            let error = TranslateError::Decode(e.to_string());
            self.fail(LocaleResponse::failed(error.to_string()), error)
        };

        // Error bodies are the same `{message}` envelope as on the translate
        // endpoint, with `message` required.
        if !response.is_ok() {
            let envelope: ApiResponse =
                serde_json::from_str(&response.body).map_err(decode_failure)?;
            let error = TranslateError::Remote {
                status: response.status,
                message: envelope.message.clone(),
            };
            return Err(self.fail(LocaleResponse::failed(envelope.message), error));
        }

        let decoded: LocaleResponse =
            serde_json::from_str(&response.body).map_err(decode_failure)?;

        match decode_locale_response(&decoded) {
            Ok(locales) => {
                self.log(
                    LogLevel::Info,
                    &format!("received {} supported locales", locales.locales.len()),
                );
                Ok(locales)
            }
            Err(error) => Err(self.fail(LocaleResponse::failed(error.to_string()), error)),
        }
    }

    /// Translate `subject` using the configured filters.
    pub fn get(&self, subject: &str) -> TranslateResult {
        let request = self
            .validate(subject)
            .and_then(|()| self.build_translate_request(subject))
            .map_err(|error| self.fail(Response::failed(error.to_string()), error))?;

        self.log(
            LogLevel::Info,
            &format!("requesting translation of {subject:?} from {}", request.url),
        );
        let response = self.execute(&request).map_err(|error| {
            self.fail(Response::failed(error.to_string()), error)
        })?;

        self.parse_translation(subject, response)
    }

    /// Translate `subject` into `locale`.
    ///
    /// The locale is appended to the filters of a copy of this request, so a
    /// locale filter that is already attached is sent as well. Use
    /// `with_locale` for replace semantics.
    pub fn localise(&self, subject: &str, locale: &str) -> TranslateResult {
        if self
            .filters
            .iter()
            .any(|filter| filter.key() == FilterKey::Locale)
        {
            self.log(
                LogLevel::Warn,
                &format!("adding locale {locale:?} to a request that already has a locale filter"),
            );
        }
        self.clone()
            .with_filter(FilterKey::Locale, locale)
            .get(subject)
    }

    pub fn get_locales(&self) -> LocalesResult {
        let checked = if self.locales_require_endpoint {
            self.validate_endpoint()
        } else {
            Ok(())
        };
        let request = checked
            .and_then(|()| self.build_locales_request())
            .map_err(|error| self.fail(LocaleResponse::failed(error.to_string()), error))?;

        self.log(
            LogLevel::Info,
            &format!("requesting supported locales from {}", request.url),
        );
        let response = self.execute(&request).map_err(|error| {
            self.fail(LocaleResponse::failed(error.to_string()), error)
        })?;

        self.parse_locales(response)
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TranslateError> {
        let response = self.transport.execute(request)?;
        self.log(
            LogLevel::Debug,
            &format!("translation service responded with HTTP {}", response.status),
        );
        Ok(response)
    }

    fn fail<T>(&self, partial: T, error: TranslateError) -> Failure<T> {
        self.log(LogLevel::Error, &error.to_string());
        Failure { partial, error }
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.logging {
            return;
        }
        let sink: &dyn Logger = match &self.logger {
            Some(logger) => &**logger,
            None => &DEFAULT_LOGGER,
        };
        sink.log(level, message);
    }
}

fn decode_locale_response(raw: &LocaleResponse) -> Result<LocaleResponse, TranslateError> {
    let locales = raw
        .locales
        .iter()
        .map(|entry| -> Result<Locale, TranslateError> {
            Ok(Locale {
                locale: codec::decode(&entry.locale)?,
                name: codec::decode(&entry.name)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LocaleResponse {
        locales,
        message: codec::decode(&raw.message)?,
    })
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.protocol, self.host, self.port)
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("origin", &self.origin)
            .field("filters", &self.filters)
            .field("custom_logger", &self.logger.is_some())
            .field("logging", &self.logging)
            .field("locales_require_endpoint", &self.locales_require_endpoint)
            .finish_non_exhaustive()
    }
}
