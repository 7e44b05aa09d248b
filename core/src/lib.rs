//! Synchronous client for a remote translation service.
//!
//! # Overview
//! A [`Request`] carries the service endpoint, an origin identifier and a list
//! of filters. [`Request::get`] translates a subject, [`Request::localise`]
//! translates into a given locale and [`Request::get_locales`] lists the
//! locales the service supports.
//!
//! # Design
//! - Configuration is by value: every `with_*` call returns a new `Request`.
//! - Each query is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), with a [`Transport`] doing the
//!   I/O in between. Tests swap the transport for a stub.
//! - Failed queries return a [`Failure`] that still carries the partial result.
//! - Progress and errors are written to a [`Logger`], `tracing` by default.

pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod logging;
pub mod origin;
pub mod request;
pub mod transport;
pub mod types;

pub use config::ClientConfig;
pub use error::{ConfigError, ErrorKind, Failure, InputError, TranslateError};
pub use filter::{Filter, FilterKey};
pub use http::{HttpRequest, HttpResponse};
pub use logging::{LogLevel, Logger, TracingLogger};
pub use request::{LocalesResult, Request, TranslateResult};
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{ApiResponse, Locale, LocaleResponse, Response};
