//! Starting actor runs.

use tracing::{debug, info, warn};

use crate::config::{ActorConfig, CredentialProvider};
use crate::error::{Result, SubmitError};
use crate::payload::{RunInput, RunResponse};
use crate::transport::Transport;

const STATUS_CREATED: u16 = 201;

/// Run endpoint for `config`, including the token query parameter.
pub fn run_url(config: &ActorConfig) -> String {
    format!(
        "{}/v2/acts/{}/runs?token={}",
        config.api_base.trim_end_matches('/'),
        config.actor_id,
        config.token
    )
}

/// An accepted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStarted {
    /// URL to poll for the run's status.
    pub status_url: String,
    pub run_id: Option<String>,
    /// Number of addresses submitted.
    pub submitted: usize,
}

/// Starts actor runs through a [`Transport`].
pub struct ActorClient<T> {
    transport: T,
}

impl<T: Transport> ActorClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submits `input`, reading credentials from `credentials`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::EmptyBatch`] when there are no addresses
    /// - credential errors from `credentials`
    /// - [`SubmitError::Rejected`] for any status other than 201
    /// - [`SubmitError::InvalidResponse`] when a 201 body lacks `data.statusUrl`
    pub fn start_run(
        &self,
        credentials: &dyn CredentialProvider,
        input: &RunInput,
    ) -> Result<RunStarted> {
        if input.street_citystatezip.is_empty() {
            return Err(SubmitError::EmptyBatch);
        }
        let config = credentials.credentials()?;
        let body = serde_json::to_string(input)
            .map_err(|e| SubmitError::InvalidResponse(format!("failed to encode input: {e}")))?;

        debug!(
            actor_id = %config.actor_id,
            api_base = %config.api_base,
            addresses = input.street_citystatezip.len(),
            max_results = input.max_results,
            "starting actor run"
        );
        let reply = self.transport.post_json(&run_url(&config), &body)?;

        if reply.status != STATUS_CREATED {
            warn!(status = reply.status, "actor run rejected");
            return Err(SubmitError::Rejected {
                status: reply.status,
                body: reply.body,
            });
        }

        let response: RunResponse = serde_json::from_str(&reply.body)
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;
        let status_url = response
            .data
            .status_url
            .ok_or_else(|| SubmitError::InvalidResponse("missing data.statusUrl".to_string()))?;

        info!(
            actor_id = %config.actor_id,
            run_id = response.data.id.as_deref().unwrap_or("-"),
            status = response.data.status.as_deref().unwrap_or("-"),
            "actor run started"
        );
        Ok(RunStarted {
            status_url,
            run_id: response.data.id,
            submitted: input.street_citystatezip.len(),
        })
    }
}
