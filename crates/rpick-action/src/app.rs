//! Action flow: inputs → inventory fetch → selection → step outputs.
use std::io::{self, Write};

use anyhow::Context;
use rpick_core::{FetchError, InventoryFetch, select_runner};
use rpick_model::SelectionResult;
use tracing::{debug, info};

use crate::{cli::Cli, commands, inputs::ActionInputs, outputs::ActionOutputs};

/// Run one selection.
///
/// `connect` builds the fetch capability from validated inputs; it is not called
/// when the inputs are invalid. Outputs are written only after a successful selection.
pub async fn execute<F, C>(cli: &Cli, connect: C) -> anyhow::Result<SelectionResult>
where
    F: InventoryFetch,
    C: FnOnce(&ActionInputs) -> Result<F, FetchError>,
{
    let inputs = ActionInputs::from_cli(cli)?;
    debug!(
        scope = %inputs.scope,
        primary = %inputs.policy.primary,
        fallback = %inputs.policy.fallback,
        primaries_required = ?inputs.policy.primaries_required.map(|q| q.get()),
        "inputs resolved"
    );

    let inventory = connect(&inputs)?;
    let result = select_runner(&inventory, &inputs.scope, &inputs.policy).await?;

    info!("Primary runner is online: {}", result.primary_online);
    if inputs.policy.has_quorum() {
        info!(
            "Sufficient primary runners available: {}",
            result.sufficient_primaries
        );
    }
    info!("Using runner: {}", result.use_runner_json());

    ActionOutputs::from_result(&result, inputs.policy.has_quorum())
        .write(cli.output_file.as_deref())
        .context("failed to write step outputs")?;
    Ok(result)
}

/// Report a failed run as an `::error::` command on `out`.
///
/// Returns `true` when the run succeeded.
pub fn report<T, W: Write>(outcome: &anyhow::Result<T>, out: &mut W) -> io::Result<bool> {
    match outcome {
        Ok(_) => Ok(true),
        Err(e) => {
            fail(&format!("{e:#}"), out)?;
            Ok(false)
        }
    }
}

/// Write `message` as an `::error::` command.
pub fn fail<W: Write>(message: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", commands::error(message.trim_end()))?;
    out.flush()
}
