#![no_std]

pub mod blink;
pub mod cancel;
pub mod config;
pub mod pattern;
pub mod presets;
pub mod scheduler;

pub use cancel::CancellationToken;
pub use config::{ConfigError, RunConfig};
pub use pattern::{Group, Preset, PresetSequencer};
pub use scheduler::{Conductor, RunError, StopReason};

pub use embassy_time::{Duration, Instant};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

pub type Rgb = smart_leds::RGB8;

/// All channels off.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Abstract LED strip port
///
/// Implement this trait to support different hardware platforms.
/// The conductor is generic over this trait.
pub trait StripPort {
    /// Error reported by a failed frame transmission.
    type Error: core::fmt::Debug;

    /// Number of addressable pixels. Constant for the port's lifetime.
    fn pixel_count(&self) -> usize;

    /// Stage a color for one pixel.
    ///
    /// Out-of-range indices must be ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Transmit the staged pixel state to the hardware.
    ///
    /// May block for the duration of the wire transfer.
    fn push_frame(&mut self) -> Result<(), Self::Error>;
}

/// A strip port shared between the blink tasks of one preset.
///
/// All frame writes go through this lock, so a staged group update and its
/// `push_frame` are atomic with respect to sibling tasks.
pub type SharedPort<S> = Mutex<CriticalSectionRawMutex, S>;
