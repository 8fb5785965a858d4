//! Run configuration and startup validation.
//!
//! A bad configuration is rejected before any hardware write happens.

use embassy_time::Duration;

use crate::pattern::Preset;

/// Timing policy for one run. Immutable.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// How long each preset's blink tasks stay active.
    pub active_window: Duration,
    /// Pause between preset activations. May be zero.
    pub short_pause: Duration,
    /// Number of completed activations between long pauses.
    pub long_pause_every: u32,
    /// Duration of the periodic long pause. May be zero.
    pub long_pause: Duration,
    /// Overall runtime deadline, checked at cycle boundaries.
    pub deadline: Duration,
}

/// Rejected configuration. Detected at startup, fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The preset sequence has no entries.
    EmptySequence,
    /// A group declares a frequency of zero hertz.
    ZeroFrequency { preset: usize, group: usize },
    /// The active window is zero.
    ZeroActiveWindow,
    /// The overall deadline is zero.
    ZeroDeadline,
    /// The long pause cadence is zero, so the pause counter would never reset.
    ZeroLongPauseCadence,
    /// A preset holds more groups than the conductor has task slots for.
    TooManyGroups { preset: usize, count: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "preset sequence is empty"),
            Self::ZeroFrequency { preset, group } => {
                write!(f, "group {group} of preset {preset} has zero frequency")
            }
            Self::ZeroActiveWindow => write!(f, "active window is zero"),
            Self::ZeroDeadline => write!(f, "overall deadline is zero"),
            Self::ZeroLongPauseCadence => write!(f, "long pause cadence is zero"),
            Self::TooManyGroups { preset, count } => {
                write!(f, "preset {preset} has {count} groups, more than available task slots")
            }
        }
    }
}

/// Validate a preset sequence and run configuration against a conductor
/// with `max_groups` task slots.
pub fn validate(
    presets: &[Preset<'_>],
    config: &RunConfig,
    max_groups: usize,
) -> Result<(), ConfigError> {
    if presets.is_empty() {
        return Err(ConfigError::EmptySequence);
    }
    if config.active_window.as_ticks() == 0 {
        return Err(ConfigError::ZeroActiveWindow);
    }
    if config.deadline.as_ticks() == 0 {
        return Err(ConfigError::ZeroDeadline);
    }
    if config.long_pause_every == 0 {
        return Err(ConfigError::ZeroLongPauseCadence);
    }
    for (preset_index, preset) in presets.iter().enumerate() {
        if preset.groups.len() > max_groups {
            return Err(ConfigError::TooManyGroups {
                preset: preset_index,
                count: preset.groups.len(),
            });
        }
        for (group_index, group) in preset.groups.iter().enumerate() {
            if group.frequency_hz == 0 {
                return Err(ConfigError::ZeroFrequency {
                    preset: preset_index,
                    group: group_index,
                });
            }
        }
    }
    Ok(())
}
