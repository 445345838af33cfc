// Drum pattern generation.
//
// A fixed backbone per bar (four-on-the-floor kick, snare on beats 2 and 4
// counted from 1) plus a closed hi-hat whose subdivision follows density:
// quarters at density 1-2, eighths at 3, sixteenths at 4-5. Pitches are
// General MIDI percussion keys.

use crate::context::SongContext;
use crate::note::{BEATS_PER_BAR, Note};
use crate::request::GenerationRequest;

pub const KICK: u8 = 36;
pub const SNARE: u8 = 38;
pub const CLOSED_HAT: u8 = 42;

const KICK_BEATS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
const SNARE_BEATS: [f64; 2] = [1.0, 3.0];

/// Hi-hat step in beats for a clamped density.
pub fn hat_step(density: u8) -> f64 {
    match density {
        0..=2 => 1.0,
        3 => 0.5,
        _ => 0.25,
    }
}

pub fn generate_drums(req: &GenerationRequest, ctx: &SongContext) -> Vec<Note> {
    let step = hat_step(req.clamped_density());
    let hats_per_bar = (BEATS_PER_BAR / step) as usize;
    let mut notes = Vec::with_capacity(
        ctx.total_bars() as usize * (KICK_BEATS.len() + SNARE_BEATS.len() + hats_per_bar),
    );

    for bar in 0..ctx.total_bars() {
        let bar_start = ctx.start_beat() + bar as f64 * BEATS_PER_BAR;

        for beat in KICK_BEATS {
            notes.push(Note::new(KICK, bar_start + beat, 0.1, 100));
        }
        for beat in SNARE_BEATS {
            notes.push(Note::new(SNARE, bar_start + beat, 0.1, 110));
        }
        // Index-based so the grid never drifts from accumulated float error.
        for i in 0..hats_per_bar {
            notes.push(Note::new(CLOSED_HAT, bar_start + i as f64 * step, 0.05, 70));
        }
    }

    notes
}
