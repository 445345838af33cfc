// Bass line generation.
//
// Follows the chord progression bar by bar, playing the chord root two
// octaves down. Density adds notes on top of the downbeat root:
//   >= 3: fifth on beat 2 (0-based)
//   >= 4: short root on beat 1
//   >= 5: short fifth on beat 3
// Notes are emitted in that order within each bar, not sorted by onset.

use crate::context::SongContext;
use crate::note::{BEATS_PER_BAR, Note};
use crate::request::GenerationRequest;

/// Semitones the chord root is dropped to reach bass register.
const BASS_DROP: u8 = 24;
const FIFTH: u8 = 7;

pub fn generate_bass(req: &GenerationRequest, ctx: &SongContext) -> Vec<Note> {
    let density = req.clamped_density();
    let mut notes = Vec::new();

    for (onset, chord) in ctx.chords_with_onsets() {
        let root = chord.root.saturating_sub(BASS_DROP);
        let fifth = root + FIFTH;

        for bar in 0..chord.whole_bars() {
            let bar_start = onset + bar as f64 * BEATS_PER_BAR;

            notes.push(Note::new(root, bar_start, 0.9, 90));
            if density >= 3 {
                notes.push(Note::new(fifth, bar_start + 2.0, 0.9, 85));
            }
            if density >= 4 {
                notes.push(Note::new(root, bar_start + 1.0, 0.5, 80));
            }
            if density >= 5 {
                notes.push(Note::new(fifth, bar_start + 3.0, 0.5, 80));
            }
        }
    }

    notes
}
