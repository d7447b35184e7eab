use anyhow::{Context, Result};
use tracing::info;

use skiptrace_cli::pipeline::{
    PrepareError, PreparedBatch, SubmitOutcome, prepare, submit_addresses,
};
use skiptrace_map::{ColumnResolver, load_alias_table};
use skiptrace_submit::{ActorClient, HttpTransport, RunInput, SecretsFile};

use crate::cli::{AliasArgs, InputArgs, PreviewArgs, SubmitArgs};
use crate::summary::{print_aliases, print_batch, print_dry_run, print_resolution};

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let batch = load_batch(&args.input)?;
    print_batch(&batch, args.limit);
    Ok(())
}

pub fn run_submit(args: &SubmitArgs) -> Result<SubmitOutcome> {
    let batch = load_batch(&args.input)?;
    print_batch(&batch, args.limit);

    if args.dry_run {
        let input = RunInput::new(batch.addresses).with_max_results(args.max_results);
        print_dry_run(&input).context("encode request body")?;
        return Ok(SubmitOutcome::DryRun {
            addresses: input.street_citystatezip.len(),
        });
    }

    let secrets = match &args.secrets {
        Some(path) => SecretsFile::new(path),
        None => SecretsFile::from_default_location()?,
    };
    info!(secrets = %secrets.path().display(), "using actor credentials");
    let client = ActorClient::new(HttpTransport::new()?);
    let outcome = submit_addresses(&client, &secrets, batch.addresses, args.max_results)
        .context("submit addresses")?;
    Ok(outcome)
}

pub fn run_aliases(args: &AliasArgs) -> Result<()> {
    let aliases = load_alias_table(args.aliases.as_deref())?;
    print_aliases(&aliases);
    Ok(())
}

fn load_batch(input: &InputArgs) -> Result<PreparedBatch> {
    let aliases = load_alias_table(input.aliases.as_deref())?;
    let resolver = ColumnResolver::new(input.cutoff);
    match prepare(&input.file, &aliases, &resolver) {
        Ok(batch) => Ok(batch),
        Err(PrepareError::Schema { report, source }) => {
            print_resolution(&report);
            Err(source.into())
        }
        Err(err) => Err(err.into()),
    }
}
