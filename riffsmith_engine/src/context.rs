// Song context: the shared harmonic frame every role generator reads.
//
// Built once per request from the style tag and bar range. The key is fixed
// at C3; the style only chooses between the major and minor progressions in
// harmony.rs. The context is immutable after construction and is dropped
// when the request completes.

use crate::error::GenerationError;
use crate::harmony::{ChordDef, ScaleKind, generate_chord_progression};
use crate::note::{BEATS_PER_BAR, bar_start_beat};
use crate::request::GenerationRequest;
use serde::Serialize;
use tracing::{debug, trace};

/// Key root for every song: C3.
pub const KEY_ROOT: u8 = 48;

/// Key, scale, chords and bar range for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongContext {
    pub key_root: u8,
    pub scale: ScaleKind,
    pub tempo: f64,
    pub chords: Vec<ChordDef>,
    pub bars_start: i32,
    pub bars_end: i32,
}

impl SongContext {
    /// Number of bars in the range (>= 1), saturating at `u32::MAX`.
    pub fn total_bars(&self) -> u32 {
        bar_count(self.bars_start, self.bars_end)
    }

    /// First beat of the range.
    pub fn start_beat(&self) -> f64 {
        bar_start_beat(self.bars_start)
    }

    /// Beat just past the end of the range.
    pub fn end_beat(&self) -> f64 {
        self.bars_end as f64 * BEATS_PER_BAR
    }

    /// Length of the range in beats.
    pub fn length_beats(&self) -> f64 {
        self.total_bars() as f64 * BEATS_PER_BAR
    }

    /// Iterate the chords with the beat at which each one starts.
    pub fn chords_with_onsets(&self) -> impl Iterator<Item = (f64, &ChordDef)> + '_ {
        self.chords.iter().scan(self.start_beat(), |beat, chord| {
            let onset = *beat;
            *beat += chord.duration_beats();
            Some((onset, chord))
        })
    }
}

/// Derive the song context for a request.
///
/// Fails with `InvalidRange` if `bars_end < bars_start`. Tempo and density
/// are passed through unchecked.
pub fn build_song_context(req: &GenerationRequest) -> Result<SongContext, GenerationError> {
    if req.bars_end < req.bars_start {
        return Err(GenerationError::InvalidRange {
            bars_start: req.bars_start,
            bars_end: req.bars_end,
        });
    }

    let total_bars = bar_count(req.bars_start, req.bars_end);
    let progression = generate_chord_progression(&req.style, total_bars, KEY_ROOT);
    debug!(
        style = %req.style,
        total_bars,
        scale = ?progression.scale,
        chords = progression.chords.len(),
        "built song context"
    );
    for chord in &progression.chords {
        trace!(root = chord.root, quality = ?chord.quality, bars = chord.duration_bars, "chord");
    }

    Ok(SongContext {
        key_root: KEY_ROOT,
        scale: progression.scale,
        tempo: req.tempo,
        chords: progression.chords,
        bars_start: req.bars_start,
        bars_end: req.bars_end,
    })
}

fn bar_count(bars_start: i32, bars_end: i32) -> u32 {
    let bars = bars_end as i64 - bars_start as i64 + 1;
    u32::try_from(bars.max(0)).unwrap_or(u32::MAX)
}
