use std::time::Duration;

use newsig_models::report::SignalReport;
use newsig_scoring::Pipeline;
use tokio_util::sync::CancellationToken;

use crate::run_cycle;
use crate::sources::Sources;

/// Re-run the pipeline every `interval` until cancelled, handing each report
/// to `emit`. The first cycle runs immediately. Cancellation is only observed
/// between cycles; a started cycle always completes.
pub async fn refresh_loop<F>(
    pipeline: &Pipeline,
    sources: &Sources,
    interval: Duration,
    cancel: CancellationToken,
    mut emit: F,
) where
    F: FnMut(&SignalReport),
{
    tracing::info!(interval_secs = interval.as_secs(), "Refresh loop starting");

    loop {
        if cancel.is_cancelled() {
            break;
        }
        let report = run_cycle(pipeline, sources).await;
        emit(&report);

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    tracing::info!("Refresh loop shutting down");
}
