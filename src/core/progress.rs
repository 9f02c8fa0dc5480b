// Repetition/round bookkeeping for the progress visualization
//
// A single bounded counting state: repetition_count lives in
// [0, explosion_threshold) once the wrap rule has been applied; reaching the
// threshold wraps back to 0 ("explosion") rather than entering a new state.

/// Progress counters for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    repetition_count: u32,
    round_count: u32,
    total_repetitions: u32,
    explosion_threshold: u32,
}

impl ProgressState {
    pub fn new(explosion_threshold: u32) -> Self {
        Self {
            repetition_count: 0,
            round_count: 0,
            total_repetitions: 0,
            explosion_threshold,
        }
    }

    /// Record one successful repetition
    pub fn register_repetition(&mut self) {
        self.repetition_count += 1;
        self.total_repetitions += 1;
        self.round_count = self.total_repetitions / self.explosion_threshold;
    }

    /// Whether the visual should explode and wrap before the next render
    pub fn needs_reset(&self) -> bool {
        self.repetition_count >= self.explosion_threshold
    }

    /// Wrap the repetition counter back to 0 after an explosion
    ///
    /// Rounds and totals are monotonic and survive the reset.
    pub fn reset(&mut self) {
        self.repetition_count = 0;
    }

    pub fn repetition_count(&self) -> u32 {
        self.repetition_count
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn total_repetitions(&self) -> u32 {
        self.total_repetitions
    }

    pub fn explosion_threshold(&self) -> u32 {
        self.explosion_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_wrap(state: &mut ProgressState) {
        if state.needs_reset() {
            state.reset();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ProgressState::new(6);
        assert_eq!(state.repetition_count(), 0);
        assert_eq!(state.round_count(), 0);
        assert_eq!(state.total_repetitions(), 0);
        assert!(!state.needs_reset());
    }

    #[test]
    fn test_register_increments_by_one() {
        let mut state = ProgressState::new(6);
        for expected in 1..=5 {
            state.register_repetition();
            assert_eq!(state.total_repetitions(), expected);
            assert_eq!(state.repetition_count(), expected);
        }
    }

    #[test]
    fn test_round_count_is_total_div_threshold() {
        let mut state = ProgressState::new(6);
        for _ in 0..20 {
            state.register_repetition();
            assert_eq!(
                state.round_count(),
                state.total_repetitions() / state.explosion_threshold()
            );
            apply_wrap(&mut state);
        }
    }

    #[test]
    fn test_wrap_rule_keeps_count_as_total_mod_threshold() {
        let mut state = ProgressState::new(6);
        for _ in 0..25 {
            state.register_repetition();
            apply_wrap(&mut state);
            assert_eq!(
                state.repetition_count(),
                state.total_repetitions() % state.explosion_threshold()
            );
            assert!(state.repetition_count() < state.explosion_threshold());
        }
    }

    #[test]
    fn test_reset_at_threshold_boundary() {
        let mut state = ProgressState::new(6);
        for _ in 0..5 {
            state.register_repetition();
        }
        assert!(!state.needs_reset());

        state.register_repetition();
        assert!(state.needs_reset());

        state.reset();
        assert_eq!(state.repetition_count(), 0);
        assert_eq!(state.round_count(), 1);
        assert_eq!(state.total_repetitions(), 6);
        assert!(!state.needs_reset());
    }

    #[test]
    fn test_totals_monotonic_across_resets() {
        let mut state = ProgressState::new(3);
        let mut previous_total = 0;
        for _ in 0..10 {
            state.register_repetition();
            assert_eq!(state.total_repetitions(), previous_total + 1);
            previous_total = state.total_repetitions();
            apply_wrap(&mut state);
        }
        assert_eq!(state.round_count(), 3);
    }
}
