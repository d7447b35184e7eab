//! Stages from uploaded file to submit-ready address list.
//!
//! ingest -> resolve columns -> format addresses -> submit. Schema failures carry the
//! full resolution report so callers can show which fields were found.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span, trace, warn};

use skiptrace_ingest::{IngestError, read_csv_table};
use skiptrace_map::{AliasTable, ColumnResolver, MappingError, ResolutionReport};
use skiptrace_model::{FieldMap, SourceTable};
use skiptrace_submit::{
    ActorClient, CredentialProvider, RunInput, RunStarted, SubmitError, Transport,
};
use skiptrace_transform::format_addresses;

use crate::logging::redact_value;

/// Failure of one of the preparation stages.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Columns could not be resolved; nothing was formatted.
    #[error("{source}")]
    Schema {
        report: ResolutionReport,
        source: MappingError,
    },
}

/// Addresses ready to be handed to the submission step.
#[derive(Debug, Clone)]
pub struct PreparedBatch {
    pub source: PathBuf,
    pub report: ResolutionReport,
    pub fields: FieldMap,
    pub addresses: Vec<String>,
}

/// Resolves columns of an in-memory table and formats every row.
///
/// # Errors
///
/// Returns [`PrepareError::Schema`] when any address field stays unresolved.
pub fn prepare_table(
    table: &SourceTable,
    aliases: &AliasTable,
    resolver: &ColumnResolver,
) -> Result<(ResolutionReport, FieldMap, Vec<String>), PrepareError> {
    let report = resolver.report(&table.upper_headers(), aliases);
    let fields = match report.clone().into_field_map() {
        Ok(fields) => fields,
        Err(source) => return Err(PrepareError::Schema { report, source }),
    };
    let addresses = format_addresses(table, &fields);
    for (row, address) in addresses.iter().enumerate() {
        trace!(row, address = redact_value(address), "formatted address");
    }
    Ok((report, fields, addresses))
}

/// Loads `path` and prepares its addresses.
///
/// # Errors
///
/// Fails when the file cannot be read or its columns cannot be resolved.
pub fn prepare(
    path: &Path,
    aliases: &AliasTable,
    resolver: &ColumnResolver,
) -> Result<PreparedBatch, PrepareError> {
    let span = info_span!("prepare", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(path)?;
    let (report, fields, addresses) = prepare_table(&table, aliases, resolver)?;
    info!(
        columns = table.headers.len(),
        rows = table.len(),
        addresses = addresses.len(),
        duration_ms = start.elapsed().as_millis(),
        "addresses prepared"
    );
    Ok(PreparedBatch {
        source: path.to_path_buf(),
        report,
        fields,
        addresses,
    })
}

/// How the remote service answered a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(RunStarted),
    /// Nothing was sent; the request body was only printed.
    DryRun { addresses: usize },
    /// Non-201 reply; `body` is the raw response text.
    Rejected { status: u16, body: String },
}

impl SubmitOutcome {
    /// Process exit code: only a rejected run fails.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Started(_) | Self::DryRun { .. } => 0,
            Self::Rejected { .. } => 1,
        }
    }
}

/// Pretty JSON body that a submission of `input` would send.
///
/// # Errors
///
/// Fails only if the input cannot be encoded.
pub fn dry_run_body(input: &RunInput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(input)
}

/// Sends `addresses` to the actor and classifies the reply.
///
/// A rejection by the service is an outcome, not an error, so the caller can
/// show the diagnostic body.
///
/// # Errors
///
/// Fails on credential, network or malformed-response errors.
pub fn submit_addresses<T: Transport>(
    client: &ActorClient<T>,
    credentials: &dyn CredentialProvider,
    addresses: Vec<String>,
    max_results: u32,
) -> Result<SubmitOutcome, SubmitError> {
    let input = RunInput::new(addresses).with_max_results(max_results);
    match client.start_run(credentials, &input) {
        Ok(started) => Ok(SubmitOutcome::Started(started)),
        Err(SubmitError::Rejected { status, body }) => {
            warn!(status, "actor service rejected the submission");
            Ok(SubmitOutcome::Rejected { status, body })
        }
        Err(err) => Err(err),
    }
}
