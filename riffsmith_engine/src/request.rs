// Generation requests and instrumental roles.
//
// `GenerationRequest` is the record the transport layer hands the engine.
// Field names on the wire follow the host application (`barsStart`,
// `barsEnd`), and every field has a default so partial JSON bodies work.
//
// Role fallback policy: role names are matched case-insensitively against
// the six known roles. Any other name resolves to `Role::Fx`. This mirrors
// the behavior the host has always relied on (an unknown role still yields
// a usable part), so it is kept as an explicit product decision rather than
// an error. Each fallback is logged at `warn`.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lowest and highest meaningful density values.
pub const MIN_DENSITY: i32 = 1;
pub const MAX_DENSITY: i32 = 5;

/// The instrumental function of a generated part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    #[default]
    Melody,
    Bass,
    Drums,
    Chords,
    Pad,
    Fx,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Melody,
        Role::Bass,
        Role::Drums,
        Role::Chords,
        Role::Pad,
        Role::Fx,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Role::Melody => "melody",
            Role::Bass => "bass",
            Role::Drums => "drums",
            Role::Chords => "chords",
            Role::Pad => "pad",
            Role::Fx => "fx",
        }
    }

    /// Strict lookup: `None` for anything that isn't a known role name.
    pub fn parse(name: &str) -> Option<Role> {
        let name = name.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a role name, falling back to `Role::Fx` for unknown names.
    pub fn from_name(name: &str) -> Role {
        Role::parse(name).unwrap_or_else(|| {
            warn!(role = name, "unrecognized role, falling back to fx");
            Role::Fx
        })
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role::from_name(&name)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A request for one generated part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub role: Role,
    /// Tempo in BPM. Carried into the song context; generators work in beats.
    pub tempo: f64,
    /// First bar of the range, 1-based and inclusive.
    pub bars_start: i32,
    /// Last bar of the range, inclusive.
    pub bars_end: i32,
    /// Free-form style tag, e.g. "dark", "lofi", "energetic".
    pub style: String,
    /// Rhythmic density. Intended range 1-5; anything else is clamped.
    pub density: i32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest {
            role: Role::Melody,
            tempo: 120.0,
            bars_start: 1,
            bars_end: 4,
            style: String::new(),
            density: 3,
        }
    }
}

impl GenerationRequest {
    /// Density clamped to [1, 5].
    pub fn clamped_density(&self) -> u8 {
        self.density.clamp(MIN_DENSITY, MAX_DENSITY) as u8
    }

    /// Number of bars in the requested range. Zero or negative when the
    /// range is inverted; the context builder rejects those. Widened to
    /// `i64` so spans across the whole `i32` range don't overflow.
    pub fn total_bars(&self) -> i64 {
        self.bars_end as i64 - self.bars_start as i64 + 1
    }
}
