// Free-text instruction interpreter.
//
// Turns a short instruction like "dark drums, strong, bars 5-8" into a
// `GenerationRequest` by keyword spotting. This is the same shallow
// matching the host's assistant panel does: no grammar, just
// case-insensitive keyword checks, first match wins. A keyword only counts
// at the start of a word, so "drums" and "bassline" match but "upbeat" does
// not hit "beat".
//
//   role      melody | drum, beat | bass | chord | pad | fx, riser, crash
//   style     dark, sad -> "dark"; bright, happy -> "bright";
//             tense -> "tense"; ambient -> "ambient"
//   density   strong -> 4; soft -> 2; otherwise 3
//   bars      first "A-B" or "A~B" integer pair, default 1-4
//
// An instruction without a role keyword yields `None`. Bar pairs are taken
// as written, so "8-2" produces a request the engine will reject.

use crate::request::{GenerationRequest, Role};

const ROLE_KEYWORDS: [(&[&str], Role); 6] = [
    (&["melody"], Role::Melody),
    (&["drum", "beat"], Role::Drums),
    (&["bass"], Role::Bass),
    (&["chord"], Role::Chords),
    (&["pad"], Role::Pad),
    (&["fx", "riser", "crash"], Role::Fx),
];

const STYLE_KEYWORDS: [(&[&str], &str); 4] = [
    (&["dark", "sad"], "dark"),
    (&["bright", "happy"], "bright"),
    (&["tense"], "tense"),
    (&["ambient"], "ambient"),
];

fn first_match<T: Copy>(text: &str, table: &[(&[&str], T)]) -> Option<T> {
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| mentions(text, kw)))
        .map(|&(_, value)| value)
}

/// True if `keyword` occurs in `text` at the start of a word.
fn mentions(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(i, _)| {
        text[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric())
    })
}

/// Interpret a free-text instruction.
pub fn interpret_instruction(text: &str) -> Option<GenerationRequest> {
    let lower = text.to_lowercase();
    let role = first_match(&lower, &ROLE_KEYWORDS)?;
    let style = first_match(&lower, &STYLE_KEYWORDS).unwrap_or("");

    let density = if mentions(&lower, "strong") {
        4
    } else if mentions(&lower, "soft") {
        2
    } else {
        3
    };

    let defaults = GenerationRequest::default();
    let (bars_start, bars_end) =
        parse_bar_range(&lower).unwrap_or((defaults.bars_start, defaults.bars_end));

    Some(GenerationRequest {
        role,
        bars_start,
        bars_end,
        style: style.to_string(),
        density,
        ..defaults
    })
}

/// Find the first `A-B` or `A~B` pair of integers (spaces allowed around
/// the separator).
pub fn parse_bar_range(text: &str) -> Option<(i32, i32)> {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() || (i > 0 && chars[i - 1].is_ascii_digit()) {
            i += 1;
            continue;
        }
        let (first, after_first) = read_number(&chars, i);
        let mut j = skip_spaces(&chars, after_first);
        if j < chars.len() && matches!(chars[j], '-' | '~') {
            j = skip_spaces(&chars, j + 1);
            if j < chars.len() && chars[j].is_ascii_digit() {
                let (second, _) = read_number(&chars, j);
                if let (Some(a), Some(b)) = (first, second) {
                    return Some((a, b));
                }
            }
        }
        i = after_first;
    }
    None
}

fn read_number(chars: &[char], start: usize) -> (Option<i32>, usize) {
    let end = chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |p| start + p);
    let digits: String = chars[start..end].iter().collect();
    (digits.parse().ok(), end)
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_role_and_mood() {
        let req = interpret_instruction("Add a dark melody").unwrap();
        assert_eq!(req.role, Role::Melody);
        assert_eq!(req.style, "dark");
        assert_eq!(req.density, 3);
        assert_eq!((req.bars_start, req.bars_end), (1, 4));
        assert_eq!(req.tempo, 120.0);
    }

    #[test]
    fn drum_synonyms_and_intensity() {
        let req = interpret_instruction("strong happy beat").unwrap();
        assert_eq!(req.role, Role::Drums);
        assert_eq!(req.style, "bright");
        assert_eq!(req.density, 4);

        let req = interpret_instruction("soft sad drums").unwrap();
        assert_eq!(req.density, 2);
        assert_eq!(req.style, "dark");
    }

    #[test]
    fn remaining_roles() {
        assert_eq!(interpret_instruction("walking bass").unwrap().role, Role::Bass);
        assert_eq!(interpret_instruction("some chords").unwrap().role, Role::Chords);
        assert_eq!(interpret_instruction("ambient pad").unwrap().role, Role::Pad);
        assert_eq!(interpret_instruction("a riser into the chorus").unwrap().role, Role::Fx);
    }

    #[test]
    fn keywords_match_only_at_word_starts() {
        assert_eq!(interpret_instruction("upbeat bass line").unwrap().role, Role::Bass);
        assert_eq!(interpret_instruction("upbeat chords").unwrap().role, Role::Chords);
        assert_eq!(interpret_instruction("bassline, please").unwrap().role, Role::Bass);
        assert_eq!(interpret_instruction("update the notes"), None);

        let req = interpret_instruction("drums, crossfade softly").unwrap();
        assert_eq!(req.density, 2);
        let req = interpret_instruction("headstrong pad").unwrap();
        assert_eq!(req.density, 3);
    }

    #[test]
    fn no_role_means_no_request() {
        assert_eq!(interpret_instruction("make it louder"), None);
        assert_eq!(interpret_instruction(""), None);
    }

    #[test]
    fn bar_ranges() {
        assert_eq!(parse_bar_range("bars 5-8"), Some((5, 8)));
        assert_eq!(parse_bar_range("from 1 ~ 16 please"), Some((1, 16)));
        assert_eq!(parse_bar_range("bar 12"), None);
        assert_eq!(parse_bar_range("3 bars, 9-12"), Some((9, 12)));
        assert_eq!(parse_bar_range("8-2"), Some((8, 2)));

        let req = interpret_instruction("tense chords bars 9~12").unwrap();
        assert_eq!((req.bars_start, req.bars_end), (9, 12));
        assert_eq!(req.style, "tense");
    }
}
