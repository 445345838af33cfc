// Scales, chord qualities and chord-progression synthesis.
//
// The engine knows two scale types and two four-chord progressions. Which
// progression a request gets is decided by keywords in its style tag:
// "dark", "tense" and "ambient" pick the minor progression (i - iv - V - III
// style offsets 0, 5, 7, 3), anything else picks the major pop progression
// (I - V - vi - IV, offsets 0, 7, 9, 5).
//
// Progression layout for `total_bars`:
// - each pattern chord gets `max(1, total_bars / 4)` bars, walking the
//   pattern until the accumulated bars reach `total_bars`;
// - any remainder is filled by repeating the last chord one bar at a time.
// For `total_bars < 4` this truncates the pattern to `total_bars` one-bar
// chords, so the bar sum always equals `total_bars`.
//
// Used by context.rs to build the song context and by the chord, pad, bass
// and melody generators for voicing.

use serde::{Deserialize, Serialize};

/// Style keywords that select the minor progression.
const MINOR_STYLE_KEYWORDS: [&str; 3] = ["dark", "tense", "ambient"];

/// Scale type of a song context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Major,
    /// Harmonic-minor flavored: raised 7th for a leading tone.
    Minor,
}

impl ScaleKind {
    /// Semitone intervals from the tonic to each of the seven degrees.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleKind::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleKind::Minor => [0, 2, 3, 5, 7, 8, 11],
        }
    }

    /// The seven scale pitches starting at `root`.
    pub fn pitches(self, root: u8) -> [u8; 7] {
        self.intervals().map(|iv| root.saturating_add(iv))
    }
}

/// Triad quality of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Close-position triad: root, third, fifth.
    pub fn triad(self) -> [u8; 3] {
        match self {
            ChordQuality::Major => [0, 4, 7],
            ChordQuality::Minor => [0, 3, 7],
            ChordQuality::Diminished => [0, 3, 6],
        }
    }

    /// Open pad voicing one octave above the root.
    pub fn pad_voicing(self) -> [u8; 3] {
        self.triad().map(|iv| iv + 12)
    }
}

/// One chord of a progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordDef {
    /// MIDI pitch of the chord root.
    pub root: u8,
    pub quality: ChordQuality,
    /// Length in bars, always >= 1.
    pub duration_bars: f64,
}

impl ChordDef {
    /// Number of whole bars this chord spans.
    pub fn whole_bars(&self) -> u32 {
        self.duration_bars.floor().max(0.0) as u32
    }

    /// Length in beats.
    pub fn duration_beats(&self) -> f64 {
        self.whole_bars() as f64 * crate::note::BEATS_PER_BAR
    }
}

/// A resolved chord progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub scale: ScaleKind,
    pub chords: Vec<ChordDef>,
}

impl Progression {
    /// Total bars covered by all chords.
    pub fn total_bars(&self) -> f64 {
        self.chords.iter().map(|c| c.duration_bars).sum()
    }
}

/// True if the style tag asks for the dark/tense minor progression.
///
/// Matching is by whole word, case-insensitive: "Dark Ambient" and
/// "tense-ish" match, "darkwave" does not.
pub fn is_minor_style(style: &str) -> bool {
    style
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| {
            MINOR_STYLE_KEYWORDS
                .iter()
                .any(|kw| word.eq_ignore_ascii_case(kw))
        })
}

/// The scale and four-chord pattern (semitone offset, quality) for a style.
fn pattern_for_style(style: &str) -> (ScaleKind, [(u8, ChordQuality); 4]) {
    use ChordQuality::{Major, Minor};
    if is_minor_style(style) {
        (
            ScaleKind::Minor,
            [(0, Minor), (5, Minor), (7, Major), (3, Minor)],
        )
    } else {
        (
            ScaleKind::Major,
            [(0, Major), (7, Major), (9, Minor), (5, Major)],
        )
    }
}

/// Build the chord progression for a style and bar count.
pub fn generate_chord_progression(style: &str, total_bars: u32, key_root: u8) -> Progression {
    let (scale, pattern) = pattern_for_style(style);
    let bars_per_chord = (total_bars / pattern.len() as u32).max(1);

    let mut chords = Vec::with_capacity(pattern.len());
    let mut used_bars = 0;

    for (offset, quality) in pattern {
        if used_bars >= total_bars {
            break;
        }
        chords.push(ChordDef {
            root: key_root.saturating_add(offset),
            quality,
            duration_bars: bars_per_chord as f64,
        });
        used_bars += bars_per_chord;
    }

    // Pad with the final chord, one bar at a time.
    if let Some(&last) = chords.last() {
        while used_bars < total_bars {
            chords.push(ChordDef {
                duration_bars: 1.0,
                ..last
            });
            used_bars += 1;
        }
    }

    Progression { scale, chords }
}
