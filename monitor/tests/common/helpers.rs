//! Test helpers for monitor test suites

use shared::logging::{CaptureLayer, LogCapture};
use tracing_subscriber::layer::SubscriberExt;

/// Install a capturing tracing subscriber for the current thread.
///
/// The returned guard must stay alive for the duration of the calls whose
/// logs are being asserted on.
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, LogCapture) {
    let (layer, capture) = CaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    (tracing::subscriber::set_default(subscriber), capture)
}
