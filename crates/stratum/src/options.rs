use serde::{Deserialize, Serialize};

pub const DEFAULT_ITERATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Barycenter reorder rounds per adjacent level pair. `0` keeps the traversal order.
    pub iterations: usize,
    /// Emit per-phase timings and crossing counts as `tracing` debug events.
    pub trace: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            trace: false,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
