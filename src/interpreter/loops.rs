use crate::graph::NodeId;
use ahash::AHashMap;

/// Iteration state of a bounded counting loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingLoop {
    pub next: i64,
    pub end: i64,
    pub step: i64,
    pub ascending: bool,
    pub iterations: u32,
    pub current: i64,
}

impl CountingLoop {
    /// Builds the state for `start..=end`. A missing or zero step is replaced
    /// by ±1, and the step's sign always follows the start→end direction.
    /// The flag reports whether a substitute step was used.
    pub fn new(start: i64, end: i64, step: Option<i64>) -> (Self, bool) {
        let ascending = start <= end;
        let (magnitude, substituted) = match step {
            Some(s) if s != 0 => (s.unsigned_abs().min(i64::MAX as u64) as i64, false),
            _ => (1, true),
        };
        let state = Self {
            next: start,
            end,
            step: if ascending { magnitude } else { -magnitude },
            ascending,
            iterations: 0,
            current: start,
        };
        (state, substituted)
    }

    fn past_end(&self) -> bool {
        if self.ascending {
            self.next > self.end
        } else {
            self.next < self.end
        }
    }
}

/// Per-loop-instance state, keyed by node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Counting(CountingLoop),
    Conditional { iterations: u32 },
}

/// Outcome of visiting a loop node once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    /// Run the body once more and revisit the loop afterwards.
    Iterate,
    /// The loop finished normally.
    Completed,
    /// The per-loop iteration cap was hit; the loop is abandoned.
    GuardTripped,
}

/// Loop State Tracker: creates state on a loop's first visit and discards it
/// when the loop completes or is abandoned.
#[derive(Debug)]
pub struct LoopTracker {
    states: AHashMap<NodeId, LoopState>,
    max_iterations: u32,
}

impl LoopTracker {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            states: AHashMap::new(),
            max_iterations,
        }
    }

    pub fn is_active(&self, node_id: &str) -> bool {
        self.states.contains_key(node_id)
    }

    pub fn begin_counting(&mut self, node_id: &str, state: CountingLoop) {
        self.states
            .insert(node_id.to_string(), LoopState::Counting(state));
    }

    /// Current index of an active counting loop, 0 when none is active.
    pub fn current_index(&self, node_id: &str) -> i64 {
        match self.states.get(node_id) {
            Some(LoopState::Counting(state)) => state.current,
            _ => 0,
        }
    }

    /// Advances a counting loop that has been started with `begin_counting`.
    pub fn advance_counting(&mut self, node_id: &str) -> LoopStep {
        let max_iterations = self.max_iterations;
        let Some(LoopState::Counting(state)) = self.states.get_mut(node_id) else {
            return LoopStep::Completed;
        };
        if state.past_end() {
            self.states.remove(node_id);
            return LoopStep::Completed;
        }
        if state.iterations >= max_iterations {
            self.states.remove(node_id);
            return LoopStep::GuardTripped;
        }
        state.current = state.next;
        state.next = state.next.saturating_add(state.step);
        state.iterations += 1;
        LoopStep::Iterate
    }

    /// Advances a conditional loop given the freshly evaluated condition.
    pub fn advance_conditional(&mut self, node_id: &str, condition: bool) -> LoopStep {
        if !condition {
            self.states.remove(node_id);
            return LoopStep::Completed;
        }
        let iterations = match self.states.get(node_id) {
            Some(LoopState::Conditional { iterations }) => *iterations,
            _ => 0,
        };
        if iterations >= self.max_iterations {
            self.states.remove(node_id);
            return LoopStep::GuardTripped;
        }
        self.states.insert(
            node_id.to_string(),
            LoopState::Conditional {
                iterations: iterations + 1,
            },
        );
        LoopStep::Iterate
    }

    pub fn iterations(&self, node_id: &str) -> u32 {
        match self.states.get(node_id) {
            Some(LoopState::Counting(state)) => state.iterations,
            Some(LoopState::Conditional { iterations }) => *iterations,
            None => 0,
        }
    }
}
