//! The conductor: activates presets one after another, with pause cadence,
//! an overall deadline and a clean-shutdown guarantee.

use core::array;

use embassy_futures::join::{join, join_array};
use embassy_futures::select::{select, select3};
use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::blink::blink_slot;
use crate::cancel::CancellationToken;
use crate::config::{self, ConfigError, RunConfig};
use crate::pattern::{Preset, PresetSequencer};
use crate::{OFF, SharedPort, StripPort};

/// Why a run reached shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The overall deadline elapsed.
    DeadlineElapsed,
    /// The global stop token was signaled.
    Interrupted,
}

/// Fatal run failure.
///
/// The strip is still forced to all-off before the error surfaces,
/// unless the final push itself is what failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError<E> {
    /// The strip port reported a write failure.
    Device(E),
}

/// Runs the preset sequence against a shared strip port.
///
/// `MAX_GROUPS` is the number of blink task slots available per preset;
/// presets with more groups are rejected at construction.
pub struct Conductor<'a, S: StripPort, const MAX_GROUPS: usize> {
    port: &'a SharedPort<S>,
    sequencer: PresetSequencer<'a>,
    config: RunConfig,
    stop: &'a CancellationToken,
    pause_counter: u32,
}

impl<'a, S: StripPort, const MAX_GROUPS: usize> Conductor<'a, S, MAX_GROUPS> {
    /// Validate the configuration and build a conductor.
    ///
    /// `stop` is the process-wide stop flag; an interrupt handler cancels it
    /// to end the run early.
    pub fn new(
        port: &'a SharedPort<S>,
        presets: &'a [Preset<'a>],
        config: RunConfig,
        stop: &'a CancellationToken,
    ) -> Result<Self, ConfigError> {
        config::validate(presets, &config, MAX_GROUPS)?;
        Ok(Self {
            port,
            sequencer: PresetSequencer::new(presets),
            config,
            stop,
            pause_counter: 0,
        })
    }

    /// Run until the deadline elapses or the stop token is signaled.
    ///
    /// On every exit path, including device failures, one final frame
    /// setting every pixel to off is pushed before this returns.
    pub async fn run(mut self) -> Result<StopReason, RunError<S::Error>> {
        let started = Instant::now();

        let outcome = loop {
            if self.stop.is_cancelled() {
                break Ok(StopReason::Interrupted);
            }
            if started.elapsed() >= self.config.deadline {
                #[cfg(feature = "esp32-log")]
                println!("deadline elapsed, shutting down");
                break Ok(StopReason::DeadlineElapsed);
            }

            if let Err(err) = self.run_preset().await {
                break Err(err);
            }
            if self.stop.is_cancelled() {
                // Interrupted mid-window; the activation did not complete.
                break Ok(StopReason::Interrupted);
            }

            self.pause_counter += 1;
            if self.pause_counter == self.config.long_pause_every {
                #[cfg(feature = "esp32-log")]
                println!("long pause for {} ms", self.config.long_pause.as_millis());
                self.hold(self.config.long_pause).await;
                self.pause_counter = 0;
            } else {
                self.hold(self.config.short_pause).await;
            }

            self.sequencer.advance();
        };

        // Terminal state: the strip must be dark on every exit path.
        let cleared = self.clear_strip().await;
        match outcome {
            Err(err) => Err(RunError::Device(err)),
            Ok(reason) => {
                cleared.map_err(RunError::Device)?;
                Ok(reason)
            }
        }
    }

    /// Activate the current preset for one window and drain its tasks.
    ///
    /// Returns once every blink task of the preset has terminated, so no
    /// task of this activation can write to the port afterwards.
    async fn run_preset(&self) -> Result<(), S::Error> {
        let preset = self.sequencer.current();
        let token = CancellationToken::new();

        #[cfg(feature = "esp32-log")]
        println!(
            "preset {} active for {} ms",
            self.sequencer.position(),
            self.config.active_window.as_millis()
        );

        let port = self.port;
        let groups = preset.groups;
        let futures: [_; MAX_GROUPS] =
            array::from_fn(|slot| blink_slot(port, groups.get(slot), &token));
        let tasks = join_array(futures);
        let window = async {
            // The hold ends early if a task hits a device failure (the task
            // cancels the token itself) or on an external stop.
            select3(
                Timer::after(self.config.active_window),
                token.cancelled(),
                self.stop.cancelled(),
            )
            .await;
            token.cancel();
        };

        let (results, ()) = join(tasks, window).await;
        for result in results {
            result?;
        }
        Ok(())
    }

    /// Timed hold between activations, cut short by an external stop.
    async fn hold(&self, duration: Duration) {
        if duration.as_ticks() == 0 {
            return;
        }
        select(Timer::after(duration), self.stop.cancelled()).await;
    }

    /// Push one frame with every pixel off.
    async fn clear_strip(&self) -> Result<(), S::Error> {
        let mut port = self.port.lock().await;
        for index in 0..port.pixel_count() {
            port.set_pixel(index, OFF);
        }
        port.push_frame()
    }
}
