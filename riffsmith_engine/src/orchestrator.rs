// Request dispatch: context → role generator → humanizer.
//
// The single entry point for one generation call. Builds the song context,
// runs exactly one role generator chosen by an exhaustive match on `Role`,
// then always humanizes the result. Unknown role names never reach this
// point: they were already resolved to `Role::Fx` when the request was
// parsed (see request.rs).
//
// The humanizer always runs, but `HumanizeConfig::enabled = false` makes it
// a pass-through. That switch is for configs and tests that want the raw
// grid; the default keeps it on.
//
// Each call is self-contained. The only state shared with the caller is
// the RNG, which is borrowed for the duration of the call.

use crate::bass::generate_bass;
use crate::context::{SongContext, build_song_context};
use crate::drums::generate_drums;
use crate::error::GenerationError;
use crate::fx::generate_fx;
use crate::humanize::{HumanizeConfig, humanize};
use crate::melody::generate_melody;
use crate::note::{Note, Sequence};
use crate::request::{GenerationRequest, Role};
use crate::sustain::{generate_chords, generate_pad};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Engine-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub humanize: HumanizeConfig,
}

/// Run the role generator for a request against a prepared context,
/// without humanization.
pub fn generate_raw(req: &GenerationRequest, ctx: &SongContext, rng: &mut impl Rng) -> Vec<Note> {
    match req.role {
        Role::Melody => generate_melody(req, ctx, rng),
        Role::Bass => generate_bass(req, ctx),
        Role::Drums => generate_drums(req, ctx),
        Role::Chords => generate_chords(req, ctx),
        Role::Pad => generate_pad(req, ctx),
        Role::Fx => generate_fx(req, ctx),
    }
}

/// Generate the humanized note sequence for a request.
pub fn generate(
    req: &GenerationRequest,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<Sequence, GenerationError> {
    let ctx = build_song_context(req)?;
    let raw = generate_raw(req, &ctx, rng);
    debug!(role = %req.role, notes = raw.len(), "generated raw notes");

    let notes = humanize(&raw, &config.humanize, rng);

    Ok(Sequence {
        notes,
        start_beat: ctx.start_beat(),
        length_beats: ctx.length_beats(),
    })
}
