//! Hands formatted addresses to a remote batch actor.
//!
//! The actor is started with one HTTP POST carrying
//! `{"street_citystatezip": [...], "max_results": N}`. A `201 Created` reply
//! means the run was accepted and its status URL is reported back; any other
//! status is a rejection whose raw body is surfaced as diagnostic text.
//!
//! Credentials are supplied through [`CredentialProvider`] so callers can
//! inject them directly or read them from a TOML secrets file. The wire is
//! abstracted by [`Transport`]; [`HttpTransport`] is the production
//! implementation.

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod transport;

pub use client::{ActorClient, RunStarted, run_url};
pub use config::{
    ActorConfig, CredentialProvider, DEFAULT_API_BASE, SecretsFile, default_secrets_path,
};
pub use error::{Result, SubmitError};
pub use payload::{DEFAULT_MAX_RESULTS, RunInput, RunResponse};
pub use transport::{HttpReply, HttpTransport, Transport};
