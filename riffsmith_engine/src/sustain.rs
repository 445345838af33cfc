// Sustained chord parts: block chords and pads.
//
// Both roles hold one three-note voicing per chord for the chord's whole
// duration. They differ only in voicing and velocity: chords use the close
// triad at the progression's register, pads sit an octave higher and play
// softer.

use crate::context::SongContext;
use crate::harmony::ChordQuality;
use crate::note::Note;
use crate::request::GenerationRequest;

const CHORD_VELOCITY: i32 = 70;
const PAD_VELOCITY: i32 = 60;

fn sustain(ctx: &SongContext, voicing: fn(ChordQuality) -> [u8; 3], velocity: i32) -> Vec<Note> {
    let mut notes = Vec::with_capacity(ctx.chords.len() * 3);
    for (onset, chord) in ctx.chords_with_onsets() {
        let duration = chord.duration_beats();
        for interval in voicing(chord.quality) {
            notes.push(Note::new(
                chord.root.saturating_add(interval),
                onset,
                duration,
                velocity,
            ));
        }
    }
    notes
}

pub fn generate_chords(_req: &GenerationRequest, ctx: &SongContext) -> Vec<Note> {
    sustain(ctx, ChordQuality::triad, CHORD_VELOCITY)
}

pub fn generate_pad(_req: &GenerationRequest, ctx: &SongContext) -> Vec<Note> {
    sustain(ctx, ChordQuality::pad_voicing, PAD_VELOCITY)
}
