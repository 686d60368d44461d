//! Scan reader lifecycle: attach, event delivery, destroy.
//!
//! [`ScanReader::attach`] spawns one task per reader. The task owns the
//! [`FrameAccumulator`] exclusively and serves both key events and the
//! idle-flush timer from a single `select!` loop, so all reader state is
//! mutated on one logical thread: no locking, strict arrival order, and a
//! flush always happens-before the next accumulation. Terminator flush and
//! timeout flush cannot double-fire — every flush disarms the deadline.
//!
//! Validated results and rejections are delivered as [`ScanEvent`]s over a
//! bounded channel consumed through [`ReaderHandle::recv`]. Exactly one
//! event is delivered per flush of a non-empty buffer.

use crate::accumulator::{FrameAccumulator, KeyOutcome};
use crate::config::FrameConfig;
use crate::manual;
use crate::validator::validate_frame;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};
use wedgescan_core::{
    InstanceId, ScanError, ScanResult, ScanSource, constants::SCAN_EVENT_CAPACITY,
};
use wedgescan_input::{AnyKeySource, KeyEventSource};

/// Parked idle timer position used while no flush deadline is armed.
const IDLE_PARK: Duration = Duration::from_secs(3600);

/// Outcome of one frame flush, delivered to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanEvent {
    /// The frame validated; here is the recognized value.
    Scan(ScanResult),

    /// The frame failed validation. The reader keeps running with a clean
    /// buffer; no recovery action is needed.
    Rejected(ScanError),
}

impl ScanEvent {
    /// Get the scan result if this event is a successful recognition.
    #[must_use]
    pub fn as_scan(&self) -> Option<&ScanResult> {
        match self {
            Self::Scan(result) => Some(result),
            Self::Rejected(_) => None,
        }
    }

    /// Get the rejection if this event is a validation failure.
    #[must_use]
    pub fn as_rejection(&self) -> Option<&ScanError> {
        match self {
            Self::Scan(_) => None,
            Self::Rejected(error) => Some(error),
        }
    }
}

/// Entry point for attaching a wedge reader to a key-event source.
///
/// # Examples
///
/// ```
/// use wedgescan_input::MockKeyboard;
/// use wedgescan_reader::{FrameConfig, ScanEvent, ScanReader};
///
/// #[tokio::main]
/// async fn main() {
///     let (keyboard, handle) = MockKeyboard::new();
///     let mut reader = ScanReader::attach(FrameConfig::default(), keyboard.into());
///
///     handle.type_str("12345").await.unwrap();
///     handle.press_enter().await.unwrap();
///
///     let event = reader.recv().await.unwrap();
///     assert_eq!(event.as_scan().unwrap().value, "12345");
/// }
/// ```
pub struct ScanReader;

impl ScanReader {
    /// Attach a reader to a key-event source and start framing.
    ///
    /// The returned handle is the reader's lifecycle object: consume events
    /// with [`ReaderHandle::recv`], tear down with
    /// [`ReaderHandle::destroy`]. The source subscription is owned by the
    /// reader task and released on destroy.
    ///
    /// Attaching two timing-based readers to the same hub makes both
    /// consume every keystroke; see the hub documentation in
    /// `wedgescan-input` for why that is a hazard.
    #[must_use]
    pub fn attach(config: FrameConfig, source: AnyKeySource) -> ReaderHandle {
        let id = InstanceId::new();
        let (event_tx, event_rx) = mpsc::channel(SCAN_EVENT_CAPACITY);

        debug!(
            reader = %id,
            source = %source.source_info().name,
            idle_timeout_ms = config.idle_timeout().as_millis() as u64,
            "scan reader attached"
        );

        let task = tokio::spawn(Self::reader_task(id, config.clone(), source, event_tx));

        ReaderHandle {
            id,
            config,
            event_rx,
            task: Some(task),
        }
    }

    /// The reader event loop. Exits when the source closes or the consumer
    /// drops/destroys the handle.
    async fn reader_task(
        id: InstanceId,
        config: FrameConfig,
        mut source: AnyKeySource,
        event_tx: mpsc::Sender<ScanEvent>,
    ) {
        let mut accumulator = FrameAccumulator::new(config.clone());

        loop {
            let deadline = accumulator.idle_deadline();
            let idle_at = deadline.unwrap_or_else(|| Instant::now() + IDLE_PARK);

            tokio::select! {
                event = source.next_event() => match event {
                    Ok(event) => {
                        let outcome = accumulator.handle_key(&event, Instant::now());
                        if let KeyOutcome::Flushed(frame) = outcome
                            && !Self::deliver(&event_tx, id, &frame, &config).await
                        {
                            break;
                        }
                    }
                    Err(error) if error.is_recoverable() => {
                        // Dropped events mean the inter-key gaps we measured
                        // are fiction; the partial frame is untrustworthy.
                        warn!(reader = %id, %error, "event stream lagged, dropping partial frame");
                        accumulator.clear();
                    }
                    Err(error) => {
                        debug!(reader = %id, %error, "key event source ended");
                        break;
                    }
                },
                _ = sleep_until(idle_at), if deadline.is_some() => {
                    if let Some(frame) = accumulator.flush_idle(Instant::now())
                        && !Self::deliver(&event_tx, id, &frame, &config).await
                    {
                        break;
                    }
                }
            }
        }
    }

    /// Validate a flushed frame and deliver the outcome. Returns `false`
    /// when the consumer is gone and the task should exit.
    async fn deliver(
        event_tx: &mpsc::Sender<ScanEvent>,
        id: InstanceId,
        frame: &str,
        config: &FrameConfig,
    ) -> bool {
        let event = match validate_frame(frame, config, ScanSource::Device) {
            Ok(result) => {
                debug!(reader = %id, chars = result.len(), "frame accepted");
                ScanEvent::Scan(result)
            }
            Err(error) => {
                warn!(reader = %id, %error, "frame rejected");
                ScanEvent::Rejected(error)
            }
        };

        event_tx.send(event).await.is_ok()
    }
}

/// Lifecycle handle for one attached reader.
///
/// Dropping the handle destroys the reader; [`destroy`](Self::destroy) does
/// the same explicitly and is idempotent.
pub struct ReaderHandle {
    id: InstanceId,
    config: FrameConfig,
    event_rx: mpsc::Receiver<ScanEvent>,
    task: Option<JoinHandle<()>>,
}

impl ReaderHandle {
    /// Receive the next scan event.
    ///
    /// Blocks asynchronously until a frame flushes. Returns `None` after
    /// [`destroy`](Self::destroy), or if the reader task exited because its
    /// source closed.
    pub async fn recv(&mut self) -> Option<ScanEvent> {
        self.event_rx.recv().await
    }

    /// This reader's instance id, as carried in its log events.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The configuration this reader was attached with.
    #[must_use]
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Returns `true` once the reader has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.task.is_none()
    }

    /// Detach from the event source and tear the reader down.
    ///
    /// Synchronous and idempotent. On return:
    /// - the reader task is cancelled and its source subscription dropped,
    /// - any partially accumulated buffer is discarded without an event,
    /// - the event channel is closed and drained, so no event — including
    ///   one already in flight — is observable afterwards.
    pub fn destroy(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.event_rx.close();
            while self.event_rx.try_recv().is_ok() {}
            debug!(reader = %self.id, "scan reader destroyed");
        }
    }

    /// Validate an explicitly submitted value against this reader's
    /// configuration.
    ///
    /// The manual path bypasses timing disambiguation entirely and returns
    /// directly rather than through the event channel; see
    /// [`submit_manual`](crate::manual::submit_manual). Usable before and
    /// after [`destroy`](Self::destroy).
    pub fn submit_manual(&self, raw: &str) -> Result<ScanResult, ScanError> {
        manual::submit_manual(raw, &self.config)
    }
}

impl Drop for ReaderHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}
