//! Stale-response suppression for superseded searches.
//!
//! A new search invalidates any fetch still in flight: each fetch is tagged
//! with the generation current when it started, and a response is rendered
//! only if its generation is still current when it lands. Late responses
//! from a superseded search are dropped instead of overwriting the display.

/// Monotonic request-generation counter for one search surface.
#[derive(Debug, Default)]
pub struct SearchSession {
    generation: u64,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search, invalidating all earlier generations.
    /// Returns the generation to tag the fetch with; generations start at 1.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a fetch tagged with `generation` may still render.
    ///
    /// Generation 0 is never issued by [`begin`](Self::begin), so a fresh
    /// session has no current fetch.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation != 0 && self.generation == generation
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
