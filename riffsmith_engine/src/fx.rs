// FX part: a crash on the downbeat and a chromatic riser across the range.

use crate::context::SongContext;
use crate::note::Note;
use crate::request::GenerationRequest;

/// GM crash cymbal 1.
pub const CRASH: u8 = 49;
/// First riser pitch (C5); each step climbs a semitone.
pub const RISER_BASE: u8 = 72;
pub const RISER_STEPS: usize = 8;

pub fn generate_fx(_req: &GenerationRequest, ctx: &SongContext) -> Vec<Note> {
    let start = ctx.start_beat();
    let span = ctx.end_beat() - start;

    let mut notes = Vec::with_capacity(1 + RISER_STEPS);
    notes.push(Note::new(CRASH, start, 4.0, 110));
    for i in 0..RISER_STEPS {
        let onset = start + span * i as f64 / RISER_STEPS as f64;
        notes.push(Note::new(RISER_BASE + i as u8, onset, 0.2, 90));
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::build_song_context;

    fn fx(bars_start: i32, bars_end: i32) -> Vec<Note> {
        let req = GenerationRequest {
            bars_start,
            bars_end,
            ..Default::default()
        };
        let ctx = build_song_context(&req).unwrap();
        generate_fx(&req, &ctx)
    }

    #[test]
    fn single_bar_riser() {
        let notes = fx(1, 1);
        assert_eq!(notes.len(), 9);
        assert_eq!(notes[0], Note::new(CRASH, 0.0, 4.0, 110));
        let riser: Vec<(u8, f64)> = notes[1..].iter().map(|n| (n.pitch, n.start)).collect();
        assert_eq!(
            riser,
            vec![
                (72, 0.0),
                (73, 0.5),
                (74, 1.0),
                (75, 1.5),
                (76, 2.0),
                (77, 2.5),
                (78, 3.0),
                (79, 3.5),
            ]
        );
    }

    #[test]
    fn riser_spans_the_whole_range() {
        let notes = fx(3, 6);
        assert_eq!(notes[0].start, 8.0);
        assert_eq!(notes[1].start, 8.0);
        // 16 beats over 8 steps -> one note every 2 beats.
        assert_eq!(notes[8].start, 22.0);
        assert!(notes[1..].iter().all(|n| n.duration == 0.2 && n.velocity == 90));
    }
}
