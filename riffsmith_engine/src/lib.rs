// Riffsmith Engine
//
// A procedural part generator for a DAW assistant. Given a role (drums,
// bass, melody, chords, pad or fx), a bar range, a tempo, a style tag and
// a density, it produces a list of note events measured in beats. The
// host places the returned notes as a clip on a track.
//
// Architecture:
// - note.rs: Note events, velocity clamping, the Sequence response envelope
// - request.rs: GenerationRequest and the closed Role enum (with the
//   documented unknown-role → fx fallback)
// - harmony.rs: Scales, chord qualities and chord-progression synthesis
// - context.rs: SongContext (key, scale, chords, bar range) built per request
// - drums.rs, bass.rs, melody.rs, sustain.rs (chords + pad), fx.rs: the six
//   role generators
// - humanize.rs: Bounded timing/velocity jitter
// - orchestrator.rs: Context → role generator → humanizer dispatch
// - prompt.rs: Keyword-based interpretation of free-text instructions
// - error.rs: GenerationError
//
// Randomness is always borrowed from the caller (`&mut impl rand::Rng`), so
// output is deterministic given a seeded RNG.

pub mod bass;
pub mod context;
pub mod drums;
pub mod error;
pub mod fx;
pub mod harmony;
pub mod humanize;
pub mod melody;
pub mod note;
pub mod orchestrator;
pub mod prompt;
pub mod request;
pub mod sustain;

pub use error::GenerationError;
pub use note::{Note, Sequence};
pub use orchestrator::{EngineConfig, generate};
pub use request::{GenerationRequest, Role};
