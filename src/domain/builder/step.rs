//! Wizard step position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based position in a builder wizard.
///
/// Steps `1..=N` are data entry for a schema with `N` steps; step `N + 1` is
/// the summary. Every constructor and movement clamps into that range, so a
/// builder can never point outside its own wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardStep(usize);

impl WizardStep {
    pub const FIRST: Self = Self(1);

    /// Returns the summary step for a wizard with `step_count` entry steps.
    pub fn summary(step_count: usize) -> Self {
        Self(step_count + 1)
    }

    /// Clamps `value` into `1..=step_count + 1`.
    pub fn clamped(value: usize, step_count: usize) -> Self {
        Self(value.clamp(1, step_count + 1))
    }

    pub fn value(&self) -> usize {
        self.0
    }

    pub fn is_summary(&self, step_count: usize) -> bool {
        self.0 > step_count
    }

    /// Moves forward one step, stopping at the summary.
    pub fn next(&self, step_count: usize) -> Self {
        Self::clamped(self.0.saturating_add(1), step_count)
    }

    /// Moves back one step, stopping at the first.
    pub fn prev(&self, step_count: usize) -> Self {
        Self::clamped(self.0.saturating_sub(1), step_count)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
