//! Runner selection: one inventory read followed by an ordered scan of the records.
//!
//! The scan walks records in inventory order and stops at the first record that
//! satisfies the policy:
//! - records that are not online, or lack a primary label, are skipped;
//! - any remaining record marks the primary pool as online;
//! - without a quorum the first such record decides;
//! - with a quorum, idle records are counted until the quorum is reached; busy ones are not.
use rpick_model::{InventoryScope, RunnerRecord, SelectionPolicy, SelectionResult};
use tracing::{debug, info, instrument, trace};

use crate::{error::CoreError, fetch::InventoryFetch};

/// Read the inventory for `scope` once and decide which runner to use.
///
/// A non-200 status yields [`CoreError::InventoryUnavailable`] and the body is not evaluated.
/// Failures of the fetch itself are returned as [`CoreError::Transport`].
#[instrument(
    level = "debug",
    skip(fetch, scope, policy),
    fields(fetcher = fetch.name(), scope = %scope.path())
)]
pub async fn select_runner<F>(
    fetch: &F,
    scope: &InventoryScope,
    policy: &SelectionPolicy,
) -> Result<SelectionResult, CoreError>
where
    F: InventoryFetch + ?Sized,
{
    let response = fetch.fetch(scope).await?;
    if !response.is_success() {
        debug!(status = response.status, "inventory request was not successful");
        return Err(CoreError::InventoryUnavailable {
            status: response.status,
        });
    }
    debug!(runners = response.page.runners.len(), "inventory received");

    let result = evaluate(policy, &response.page.runners);
    info!(
        chosen = %result.chosen,
        primary_online = result.primary_online,
        sufficient_primaries = result.sufficient_primaries,
        "runner selected"
    );
    Ok(result)
}

/// Evaluate runner records against `policy`.
///
/// Records are pulled from `records` only until the decision is made.
pub fn evaluate<'a, I>(policy: &SelectionPolicy, records: I) -> SelectionResult
where
    I: IntoIterator<Item = &'a RunnerRecord>,
{
    let mut primary_online = false;
    let mut available: u32 = 0;

    for record in records {
        if !record.status.is_online() {
            trace!(runner = %record.display_name(), status = %record.status, "skip: not online");
            continue;
        }
        if !record.has_labels(&policy.primary) {
            trace!(runner = %record.display_name(), "skip: missing primary labels");
            continue;
        }
        primary_online = true;

        let Some(required) = policy.primaries_required else {
            debug!(runner = %record.display_name(), "primary runner is online");
            return SelectionResult::primary(policy.primary.clone());
        };

        if record.busy {
            debug!(runner = %record.display_name(), "primary runner is busy, not counted");
            continue;
        }
        available += 1;
        trace!(available, required = required.get(), "idle primary runner counted");

        if available >= required.get() {
            debug!(available, "primary quorum reached");
            return SelectionResult::primary(policy.primary.clone());
        }
    }

    if let Some(required) = policy.primaries_required {
        debug!(available, required = required.get(), "primary quorum not reached");
    }
    SelectionResult::fallback(policy.fallback.clone(), primary_online)
}
