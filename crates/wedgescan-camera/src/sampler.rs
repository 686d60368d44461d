//! Camera sampling loop and lifecycle.
//!
//! [`CameraSampler::start`] acquires the camera and spawns one task that
//! owns the device for the sampler's whole life. Each interval tick grabs
//! the current frame, computes the presence statistics, and emits one
//! [`CameraSample`] over a bounded channel consumed through
//! [`SamplerHandle::recv`].
//!
//! Shutdown ordering is the load-bearing part: on
//! [`SamplerHandle::stop`], the task closes the device — stopping every
//! live track — *before* the tick loop (and the interval with it) is torn
//! down. A tick can therefore never observe a released camera handle, and
//! once `stop` returns, zero further samples are observable.

use crate::detect::{CameraSample, DetectorConfig, classify, frame_stats};
use crate::devices::AnyCameraDevice;
use crate::error::Result;
use crate::traits::CameraDevice;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};
use wedgescan_core::{
    InstanceId,
    constants::{CAMERA_SAMPLE_CAPACITY, DEFAULT_SAMPLE_INTERVAL_MS},
};

/// Configuration for one camera sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Interval between presence samples.
    pub sample_interval: Duration,

    /// Heuristic thresholds.
    pub detector: DetectorConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_millis(DEFAULT_SAMPLE_INTERVAL_MS),
            detector: DetectorConfig::default(),
        }
    }
}

/// Entry point for starting a camera presence sampler.
pub struct CameraSampler;

impl CameraSampler {
    /// Acquire the camera and start sampling.
    ///
    /// The first sample is taken immediately, then one per
    /// `sample_interval`. If the consumer falls behind, ticks are skipped
    /// rather than queued — presence feedback is only useful fresh.
    ///
    /// # Errors
    ///
    /// Acquisition failures surface here and only here: permission denied,
    /// device not found, device in use, or a generic acquisition failure.
    /// On error the device is left closed and `start` may be called again
    /// after the user resolves the condition; nothing is retried
    /// automatically.
    pub async fn start(
        mut device: AnyCameraDevice,
        config: SamplerConfig,
    ) -> Result<SamplerHandle> {
        device.open().await?;

        let id = InstanceId::new();
        debug!(
            sampler = %id,
            camera = %device.camera_info().name,
            interval_ms = config.sample_interval.as_millis() as u64,
            "camera sampler started"
        );

        let (sample_tx, sample_rx) = mpsc::channel(CAMERA_SAMPLE_CAPACITY);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(Self::sampler_task(
            id,
            config,
            device,
            sample_tx,
            shutdown_rx,
        ));

        Ok(SamplerHandle {
            id,
            sample_rx,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        })
    }

    /// The sampling loop. Owns the device; closes it on every exit path.
    async fn sampler_task(
        id: InstanceId,
        config: SamplerConfig,
        mut device: AnyCameraDevice,
        sample_tx: mpsc::Sender<CameraSample>,
        mut shutdown_rx: oneshot::Receiver<()>,
    ) -> Result<()> {
        let mut ticker = tokio::time::interval(config.sample_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    // Tracks first, then the timer: the loop only exits
                    // after the device is released, so no further tick can
                    // run against a released handle.
                    device.close().await?;
                    debug!(sampler = %id, "camera sampler stopped");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    match device.grab_frame().await {
                        Ok(frame) => {
                            let stats = frame_stats(&frame, &config.detector);
                            let verdict = classify(&stats, &config.detector);
                            if sample_tx.send(CameraSample::new(verdict, stats)).await.is_err() {
                                device.close().await?;
                                debug!(sampler = %id, "sample consumer gone, sampler stopped");
                                return Ok(());
                            }
                        }
                        Err(error) => {
                            // Mid-run failures are terminal: release the
                            // camera and end the loop. The application
                            // restarts sampling explicitly if it wants to.
                            warn!(sampler = %id, %error, "frame grab failed, stopping sampler");
                            device.close().await?;
                            return Err(error);
                        }
                    }
                }
            }
        }
    }
}

/// Lifecycle handle for one running sampler.
///
/// Dropping the handle without calling [`stop`](Self::stop) aborts the
/// sampling task; explicit `stop` is the contract for deterministic track
/// release.
#[derive(Debug)]
pub struct SamplerHandle {
    id: InstanceId,
    sample_rx: mpsc::Receiver<CameraSample>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<()>>>,
}

impl SamplerHandle {
    /// Receive the next presence sample.
    ///
    /// Returns `None` if the sampler task has ended (grab failure or
    /// consumer-side teardown).
    pub async fn recv(&mut self) -> Option<CameraSample> {
        self.sample_rx.recv().await
    }

    /// This sampler's instance id, as carried in its log events.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Stop sampling and release the camera.
    ///
    /// Waits for the task to stop every live track and exit, then closes
    /// and drains the sample channel. On return the camera reports zero
    /// live tracks and no further sample is observable anywhere.
    ///
    /// # Errors
    ///
    /// Propagates a failure from the hardware release itself. Task
    /// cancellation and panics are swallowed with a warning; shutdown does
    /// not fail because the sampler died first.
    pub async fn stop(mut self) -> Result<()> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }

        let result = match self.task.take() {
            Some(task) => match task.await {
                Ok(task_result) => task_result,
                Err(join_error) => {
                    if !join_error.is_cancelled() {
                        warn!(sampler = %self.id, error = %join_error, "sampler task panicked");
                    }
                    Ok(())
                }
            },
            None => Ok(()),
        };

        self.sample_rx.close();
        while self.sample_rx.try_recv().is_ok() {}

        result
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
