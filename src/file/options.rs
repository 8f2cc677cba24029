/// How Set-Tempo events govern the tracks of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TempoScope {
    /// Each track follows only its own Set-Tempo events
    #[default]
    PerTrack,
    /// Set-Tempo events from all tracks form one tempo map that every track follows.
    ///
    /// Format 2 files ignore this and use [`TempoScope::PerTrack`].
    Shared,
}

/// Settings for [`MidiFile::parse_with`](super::MidiFile::parse_with)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadOptions {
    /// See [`TempoScope`]
    pub tempo_scope: TempoScope,
}

impl LoadOptions {
    /// Options with the given tempo scope
    pub const fn with_tempo_scope(mut self, tempo_scope: TempoScope) -> Self {
        self.tempo_scope = tempo_scope;
        self
    }
}
