mod tests {
    use blink_conductor::{Duration, Group, Preset, PresetSequencer, Rgb};

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    const GROUP_A: Group<'static> = Group {
        indices: &[0, 1, 2],
        color: WHITE,
        frequency_hz: 2,
    };

    const GROUP_B: Group<'static> = Group {
        indices: &[4, 5],
        color: WHITE,
        frequency_hz: 21,
    };

    #[test]
    fn test_half_period_two_hz() {
        // 2 Hz toggles every 250 ms, four full cycles per second.
        assert_eq!(GROUP_A.half_period(), Duration::from_millis(250));
    }

    #[test]
    fn test_half_period_rounds_down() {
        assert_eq!(GROUP_B.half_period(), Duration::from_micros(23_809));
    }

    #[test]
    fn test_sequencer_starts_at_first_preset() {
        let presets = [Preset { groups: &[GROUP_A] }, Preset { groups: &[GROUP_B] }];
        let sequencer = PresetSequencer::new(&presets);
        assert_eq!(sequencer.position(), 0);
        assert_eq!(sequencer.current().groups.len(), 1);
        assert_eq!(sequencer.len(), 2);
        assert!(!sequencer.is_empty());
    }

    #[test]
    fn test_sequencer_wraps_after_last_preset() {
        let presets = [
            Preset { groups: &[GROUP_A] },
            Preset { groups: &[GROUP_B] },
            Preset {
                groups: &[GROUP_A, GROUP_B],
            },
        ];
        let mut sequencer = PresetSequencer::new(&presets);
        sequencer.advance();
        assert_eq!(sequencer.position(), 1);
        sequencer.advance();
        assert_eq!(sequencer.position(), 2);
        sequencer.advance();
        assert_eq!(sequencer.position(), 0);
    }
}
