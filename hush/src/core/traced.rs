use std::future::Future;

use tokio::task::JoinHandle;
use tracing::Instrument;
use twilight_model::gateway::event::EventType;

/// Runs one gateway event's work as its own task.
pub fn tokio_spawn(
    kind: EventType,
    fut: impl Future<Output = ()> + Send + 'static,
) -> JoinHandle<()> {
    tokio::spawn(fut.instrument(tracing::trace_span!("task", event = ?kind)))
}
