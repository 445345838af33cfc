// Melody generation from a repeated random motif.
//
// A four-note motif is sampled once per call: each pitch uniformly from the
// context scale one octave above the key root, each length uniformly from
// {0.25, 0.5, 0.75} beats. The motif is then stated back to back across the
// requested range. Every statement independently has a 30% chance of being
// shifted a whole step up or down.
//
// The last statement is cut at the range end: notes that would start at or
// past the end are dropped, and a note that crosses the end is shortened so
// it stops exactly there.
//
// All randomness comes from the caller's RNG, so a seeded RNG reproduces
// the melody exactly.

use crate::context::SongContext;
use crate::note::Note;
use crate::request::GenerationRequest;
use rand::Rng;

pub const MOTIF_LEN: usize = 4;
pub const MOTIF_DURATIONS: [f64; 3] = [0.25, 0.5, 0.75];
pub const TRANSPOSE_PROBABILITY: f64 = 0.3;
pub const TRANSPOSE_SEMITONES: i16 = 2;

const MELODY_VELOCITY: i32 = 100;

/// One motif note: pitch and length in beats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifNote {
    pub pitch: u8,
    pub duration: f64,
}

/// Sample a motif from the given scale pitches.
pub fn sample_motif(scale: &[u8], rng: &mut impl Rng) -> Vec<MotifNote> {
    (0..MOTIF_LEN)
        .map(|_| MotifNote {
            pitch: scale[rng.random_range(0..scale.len())],
            duration: MOTIF_DURATIONS[rng.random_range(0..MOTIF_DURATIONS.len())],
        })
        .collect()
}

/// Transposition for the next motif statement: 0, or +/- a whole step.
fn statement_shift(rng: &mut impl Rng) -> i16 {
    if rng.random_bool(TRANSPOSE_PROBABILITY) {
        if rng.random_bool(0.5) {
            TRANSPOSE_SEMITONES
        } else {
            -TRANSPOSE_SEMITONES
        }
    } else {
        0
    }
}

pub fn generate_melody(
    _req: &GenerationRequest,
    ctx: &SongContext,
    rng: &mut impl Rng,
) -> Vec<Note> {
    let scale = ctx.scale.pitches(ctx.key_root.saturating_add(12));
    let motif = sample_motif(&scale, rng);

    let end = ctx.end_beat();
    let mut cursor = ctx.start_beat();
    let mut notes = Vec::new();

    'statements: while cursor < end {
        let shift = statement_shift(rng);
        for step in &motif {
            if cursor >= end {
                break 'statements;
            }
            let pitch = (step.pitch as i16 + shift).clamp(0, 127) as u8;
            let duration = step.duration.min(end - cursor);
            notes.push(Note::new(pitch, cursor, duration, MELODY_VELOCITY));
            cursor += step.duration;
        }
    }

    notes
}
