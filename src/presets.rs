//! Built-in showcase sequence for a 210-pixel strip split into five regions.
//!
//! The region tables and timings match the installation this crate was
//! written for; they double as a worked example of the data-driven preset
//! format. Validated by the same path as user-supplied tables.

use embassy_time::Duration;

use crate::config::RunConfig;
use crate::pattern::{Group, Preset};
use crate::{OFF, Rgb};

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

const RIGHT_TOP: &[u16] = &[0, 1, 2, 25, 26, 27, 28, 29, 30];
const LEFT_TOP: &[u16] = &[11, 12, 13, 14, 15, 16, 39, 40, 41];
const CENTER: &[u16] = &[90, 91, 105, 104, 119, 118];
const LEFT_BOTTOM: &[u16] = &[179, 180, 181, 182, 183, 184, 207, 208, 209];
const RIGHT_BOTTOM: &[u16] = &[168, 169, 170, 195, 194, 193, 196, 197, 198];

const fn group(indices: &'static [u16], frequency_hz: u32, color: Rgb) -> Group<'static> {
    Group {
        indices,
        color,
        frequency_hz,
    }
}

/// Pixel count of the showcase strip.
pub const SHOWCASE_PIXELS: usize = 210;

/// Number of groups per showcase preset; use as the conductor's task slots.
pub const SHOWCASE_GROUPS: usize = 5;

/// The showcase sequence: six presets over the five regions.
pub const SHOWCASE_SEQUENCE: &[Preset<'static>] = &[
    Preset {
        groups: &[
            group(RIGHT_TOP, 21, WHITE),
            group(LEFT_TOP, 6, WHITE),
            group(CENTER, 10, WHITE),
            group(LEFT_BOTTOM, 21, WHITE),
            group(RIGHT_BOTTOM, 6, WHITE),
        ],
    },
    Preset {
        groups: &[
            group(RIGHT_TOP, 6, WHITE),
            group(LEFT_TOP, 6, WHITE),
            group(CENTER, 6, WHITE),
            group(LEFT_BOTTOM, 6, WHITE),
            group(RIGHT_BOTTOM, 6, WHITE),
        ],
    },
    // Groups with an off color blink invisibly.
    Preset {
        groups: &[
            group(RIGHT_TOP, 4, WHITE),
            group(LEFT_TOP, 4, OFF),
            group(CENTER, 4, OFF),
            group(LEFT_BOTTOM, 4, WHITE),
            group(RIGHT_BOTTOM, 4, OFF),
        ],
    },
    Preset {
        groups: &[
            group(RIGHT_TOP, 6, WHITE),
            group(LEFT_TOP, 21, WHITE),
            group(CENTER, 10, WHITE),
            group(LEFT_BOTTOM, 6, WHITE),
            group(RIGHT_BOTTOM, 21, WHITE),
        ],
    },
    Preset {
        groups: &[
            group(RIGHT_TOP, 6, WHITE),
            group(LEFT_TOP, 6, WHITE),
            group(CENTER, 2, WHITE),
            group(LEFT_BOTTOM, 4, WHITE),
            group(RIGHT_BOTTOM, 4, WHITE),
        ],
    },
    Preset {
        groups: &[
            group(RIGHT_TOP, 5, OFF),
            group(LEFT_TOP, 5, WHITE),
            group(CENTER, 5, OFF),
            group(LEFT_BOTTOM, 5, OFF),
            group(RIGHT_BOTTOM, 5, WHITE),
        ],
    },
];

/// Timing policy the showcase sequence runs with.
pub const SHOWCASE_CONFIG: RunConfig = RunConfig {
    active_window: Duration::from_secs(10),
    short_pause: Duration::from_millis(100),
    long_pause_every: 15,
    long_pause: Duration::from_secs(10),
    deadline: Duration::from_secs(15 * 60),
};
