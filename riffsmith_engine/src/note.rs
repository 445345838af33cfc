// Note events: the output representation of every generator.
//
// A generated part is a flat, ordered list of `Note`s measured in beats
// (quarter notes) from the start of the song. Bars are always 4/4, so bar
// `n` (1-based) begins at beat `(n - 1) * 4`.
//
// `Sequence` wraps a note list together with the clip region it was
// generated for, which is what the host uses to place the part on a track.

use serde::{Deserialize, Serialize};

/// Beats per bar. Everything in the engine assumes 4/4.
pub const BEATS_PER_BAR: f64 = 4.0;

/// Lowest and highest legal MIDI velocities for a sounding note.
pub const MIN_VELOCITY: u8 = 1;
pub const MAX_VELOCITY: u8 = 127;

/// A single note event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// MIDI note number (0-127). 60 = middle C.
    pub pitch: u8,
    /// Onset in beats from the song origin.
    pub start: f64,
    /// Length in beats. Always > 0.
    pub duration: f64,
    /// MIDI velocity, always within [1, 127].
    pub velocity: u8,
}

impl Note {
    /// Build a note, clamping the velocity into the legal range.
    pub fn new(pitch: u8, start: f64, duration: f64, velocity: i32) -> Self {
        Note {
            pitch,
            start,
            duration,
            velocity: clamp_velocity(velocity),
        }
    }

    /// Beat at which this note stops sounding.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Clamp an arbitrary integer velocity into [1, 127].
pub fn clamp_velocity(velocity: i32) -> u8 {
    velocity.clamp(MIN_VELOCITY as i32, MAX_VELOCITY as i32) as u8
}

/// Beat offset of the first beat of a 1-based bar number.
pub fn bar_start_beat(bar: i32) -> f64 {
    (bar as f64 - 1.0) * BEATS_PER_BAR
}

/// A generated part plus the clip region it occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    pub notes: Vec<Note>,
    /// First beat of the requested bar range.
    pub start_beat: f64,
    /// Length of the requested bar range in beats.
    pub length_beats: f64,
}

/// Convert a MIDI pitch to a compact note name (e.g. "C4", "F#3").
pub fn pitch_name(pitch: u8) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
    ];
    let octave = pitch as i32 / 12 - 1;
    format!("{}{}", NAMES[(pitch % 12) as usize], octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_is_clamped() {
        assert_eq!(clamp_velocity(-20), 1);
        assert_eq!(clamp_velocity(0), 1);
        assert_eq!(clamp_velocity(64), 64);
        assert_eq!(clamp_velocity(300), 127);
        assert_eq!(Note::new(60, 0.0, 1.0, 500).velocity, 127);
    }

    #[test]
    fn bar_offsets() {
        assert_eq!(bar_start_beat(1), 0.0);
        assert_eq!(bar_start_beat(2), 4.0);
        assert_eq!(bar_start_beat(5), 16.0);
        assert_eq!(bar_start_beat(0), -4.0);
        assert_eq!(bar_start_beat(i32::MIN), (i32::MIN as f64 - 1.0) * 4.0);
    }

    #[test]
    fn pitch_names() {
        assert_eq!(pitch_name(60), "C4");
        assert_eq!(pitch_name(48), "C3");
        assert_eq!(pitch_name(66), "F#4");
        assert_eq!(pitch_name(0), "C-1");
    }

    #[test]
    fn sequence_serializes_camel_case() {
        let seq = Sequence {
            notes: vec![Note::new(36, 0.0, 0.1, 100)],
            start_beat: 0.0,
            length_beats: 4.0,
        };
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json["startBeat"], 0.0);
        assert_eq!(json["lengthBeats"], 4.0);
        assert_eq!(json["notes"][0]["pitch"], 36);
        assert_eq!(json["notes"][0]["velocity"], 100);
    }
}
