use embassy_time::Duration;

use crate::Rgb;

/// A set of strip indices sharing one color and one blink frequency.
///
/// Owned by exactly one preset; immutable after construction. Groups of the
/// same preset may overlap in index space; the last write per frame wins.
#[derive(Debug, Clone, Copy)]
pub struct Group<'a> {
    pub indices: &'a [u16],
    pub color: Rgb,
    pub frequency_hz: u32,
}

impl Group<'_> {
    /// Duration one state (on or off) is held: `1 / (2 * frequency_hz)`.
    pub const fn half_period(&self) -> Duration {
        Duration::from_micros(500_000 / self.frequency_hz as u64)
    }
}

/// A configuration of groups that blink concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Preset<'a> {
    pub groups: &'a [Group<'a>],
}

/// Cyclic cursor over an ordered, non-empty preset sequence.
///
/// Pure indexing, no timing.
#[derive(Debug)]
pub struct PresetSequencer<'a> {
    presets: &'a [Preset<'a>],
    cursor: usize,
}

impl<'a> PresetSequencer<'a> {
    /// Create a sequencer over `presets`.
    ///
    /// The sequence must be non-empty; `Conductor::new` enforces this for
    /// sequencers it builds itself.
    pub const fn new(presets: &'a [Preset<'a>]) -> Self {
        Self { presets, cursor: 0 }
    }

    /// The preset the cursor points at.
    pub fn current(&self) -> Preset<'a> {
        self.presets[self.cursor]
    }

    /// Move the cursor forward by one, wrapping after the last preset.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.presets.len();
    }

    /// Current cursor position.
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of presets in the sequence.
    pub const fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the sequence is empty.
    pub const fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
