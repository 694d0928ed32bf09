//! Reveal-on-scroll bookkeeping.
//!
//! Reveal targets are identified by their index in the page's target
//! registry. Marking is one-way: once an element is revealed it stays
//! revealed, no matter how many more intersection changes arrive.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::config::HeroStep;

/// Index of a reveal target in the page registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

/// Monotonic set of revealed targets.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    marked: HashSet<RevealId>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as revealed. Returns `true` only the first time.
    pub fn mark(&mut self, id: RevealId) -> bool {
        self.marked.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: RevealId) -> bool {
        self.marked.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

/// Staggered hero entrance, released step by step as time passes.
#[derive(Debug, Clone)]
pub struct HeroSchedule {
    steps: Vec<HeroStep>,
    released: Vec<bool>,
}

impl HeroSchedule {
    /// Build a schedule; steps are ordered by delay, ties keep their given order.
    #[must_use]
    pub fn new(mut steps: Vec<HeroStep>) -> Self {
        steps.sort_by_key(|step| step.delay_ms);
        let released = vec![false; steps.len()];
        Self { steps, released }
    }

    #[must_use]
    pub fn steps(&self) -> &[HeroStep] {
        &self.steps
    }

    /// Selectors whose delay has elapsed and that have not been released yet.
    pub fn due(&mut self, elapsed_ms: f64) -> Vec<String> {
        let mut out = Vec::new();
        for (step, released) in self.steps.iter().zip(self.released.iter_mut()) {
            if *released || elapsed_ms < f64::from(step.delay_ms) {
                continue;
            }
            *released = true;
            out.push(step.selector.clone());
        }
        out
    }

    /// Whether every step has been released.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.released.iter().all(|r| *r)
    }
}
