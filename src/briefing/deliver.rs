use std::time::Duration;

use tracing::{error, info, warn};

use crate::core::models::{Chunk, ParseMode};
use crate::errors::SendError;
use crate::telegram::MessageSender;

/// Aggregate outcome of one delivery run. Individual chunk failures are
/// recorded here instead of propagating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Send every chunk in sequence order. A chunk whose rich markup is rejected
/// is retried once as plain text with the same content; any other failure is
/// logged and the chunk abandoned. The pause between sends keeps chunks
/// arriving in order, since the endpoint gives no ordering guarantee.
pub async fn deliver(
    sender: &dyn MessageSender,
    chunks: &[Chunk],
    pause: Duration,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for chunk in chunks {
        if chunk.index > 0 {
            tokio::time::sleep(pause).await;
        }
        match send_chunk(sender, chunk).await {
            Ok(()) => report.delivered += 1,
            Err(error) => {
                error!(chunk = chunk.index, error = %error, "chunk delivery failed");
                report.failed += 1;
            }
        }
    }

    info!(
        delivered = report.delivered,
        failed = report.failed,
        "delivery finished"
    );
    report
}

/// Per-chunk state machine: attempt in the declared mode; on a formatting
/// rejection of a rich attempt, retry exactly once in plain mode.
async fn send_chunk(sender: &dyn MessageSender, chunk: &Chunk) -> Result<(), SendError> {
    match sender.send(&chunk.text, chunk.mode).await {
        Ok(()) => Ok(()),
        Err(SendError::FormatRejected) if chunk.mode == ParseMode::Markdown => {
            warn!(
                chunk = chunk.index,
                "markup rejected by endpoint, retrying as plain text"
            );
            sender.send(&chunk.text, ParseMode::Plain).await
        }
        Err(error) => Err(error),
    }
}
