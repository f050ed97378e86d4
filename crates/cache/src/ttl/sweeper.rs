//! Background expiry sweep
//!
//! One named thread per cache wakes every cleanup interval and sweeps the
//! shards. It holds at most one shard lock at a time and exits as soon as its
//! stop channel receives a signal or disconnects.

use super::sweep_shards;
use crate::shard::Shard;
use crossbeam::channel::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const THREAD_NAME: &str = "strategic-cache-sweeper";

/// Handle to a running sweeper thread
#[derive(Debug)]
pub(crate) struct Sweeper {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Sweeper {
    /// Start sweeping `shards` every `interval`
    ///
    /// Returns `None` when the interval is zero or the thread cannot be
    /// spawned; lazy expiry on reads still applies in both cases.
    pub fn spawn(shards: Arc<[Shard]>, interval: Duration) -> Option<Self> {
        if interval.is_zero() {
            return None;
        }

        let (stop, stopped) = channel::bounded::<()>(1);
        let spawned = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let ticker = channel::tick(interval);
                loop {
                    channel::select! {
                        recv(stopped) -> _ => break,
                        recv(ticker) -> _ => {
                            let removed = sweep_shards(&shards);
                            if removed > 0 {
                                tracing::debug!(removed, "swept expired entries");
                            }
                        }
                    }
                }
                tracing::debug!("expiry sweeper stopped");
            });

        match spawned {
            Ok(handle) => Some(Self {
                stop,
                handle: Some(handle),
            }),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "failed to start expiry sweeper, relying on lazy expiry"
                );
                None
            }
        }
    }

    /// Signal the thread and wait for it to finish
    pub fn stop(mut self) {
        let _ = self.stop.try_send(());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("expiry sweeper panicked");
            }
        }
    }
}
