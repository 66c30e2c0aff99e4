//! Frame clock
//!
//! Turns variable frame deltas into fixed 60 Hz simulation ticks and 1 Hz
//! countdown steps. Both accumulators are dropped whenever the game is not
//! playing, so nothing fires after a win, a loss or a return to the menu.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GamePhase, GameState, TickInput, countdown, tick};

/// What a single `advance` call ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSteps {
    pub ticks: u32,
    pub seconds: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    tick_accumulator: f32,
    second_accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partial tick or second
    pub fn reset(&mut self) {
        self.tick_accumulator = 0.0;
        self.second_accumulator = 0.0;
    }

    /// Feed `dt` seconds of wall time. Countdown steps run before the
    /// simulation ticks of the same frame.
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput, dt: f32) -> FrameSteps {
        let mut steps = FrameSteps::default();
        if state.phase != GamePhase::Playing {
            self.reset();
            return steps;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        self.second_accumulator += dt;
        while self.second_accumulator >= 1.0 && state.phase == GamePhase::Playing {
            countdown(state);
            self.second_accumulator -= 1.0;
            steps.seconds += 1;
        }

        self.tick_accumulator += dt;
        while self.tick_accumulator >= SIM_DT
            && steps.ticks < MAX_SUBSTEPS
            && state.phase == GamePhase::Playing
        {
            tick(state, input);
            self.tick_accumulator -= SIM_DT;
            steps.ticks += 1;
        }

        if state.phase != GamePhase::Playing {
            self.reset();
        }
        steps
    }
}

/// Start/stop gate for a host frame loop that can be suspended and resumed
/// (page hidden, then restored from the back/forward cache). Each resume
/// starts a new generation; callbacks from an older generation must exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopControl {
    stopped: bool,
    generation: u32,
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation the first loop runs under
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Restart after a stop. Returns the generation for the new loop, or
    /// `None` when the loop was never stopped (it is still running).
    pub fn resume(&mut self) -> Option<u32> {
        if !self.stopped {
            return None;
        }
        self.stopped = false;
        self.generation = self.generation.wrapping_add(1);
        Some(self.generation)
    }

    /// Whether a frame scheduled under `generation` should run
    pub fn accepts(&self, generation: u32) -> bool {
        !self.stopped && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::new(Tuning::default());
        state.start_level(0);
        state.enemies.clear();
        state
    }

    #[test]
    fn test_one_tick_per_sim_frame() {
        let mut state = playing();
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            let steps = clock.advance(&mut state, &TickInput::default(), SIM_DT);
            assert_eq!(steps.ticks, 1);
        }
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_about_sixty_ticks_per_second() {
        let mut state = playing();
        let mut clock = FrameClock::new();
        let mut total = FrameSteps::default();
        for _ in 0..16 {
            let steps = clock.advance(&mut state, &TickInput::default(), 0.0625);
            total.ticks += steps.ticks;
            total.seconds += steps.seconds;
        }
        assert!((59..=60).contains(&total.ticks), "ran {} ticks", total.ticks);
        assert_eq!(total.seconds, 1);
        assert_eq!(state.time_left, crate::sim::LEVELS[0].time_limit - 1);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut state = playing();
        let mut clock = FrameClock::new();
        let steps = clock.advance(&mut state, &TickInput::default(), 5.0);
        assert!(steps.ticks <= 6);
        assert_eq!(steps.seconds, 0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut state = playing();
        let mut clock = FrameClock::new();
        let steps = clock.advance(&mut state, &TickInput::default(), -1.0);
        assert_eq!(steps, FrameSteps::default());
    }

    #[test]
    fn test_nothing_runs_outside_playing() {
        let mut state = GameState::new(Tuning::default());
        let mut clock = FrameClock::new();
        let steps = clock.advance(&mut state, &TickInput::default(), 0.1);
        assert_eq!(steps, FrameSteps::default());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_timeout_stops_ticks() {
        let mut state = playing();
        state.time_left = 1;
        let mut clock = FrameClock::new();

        for _ in 0..16 {
            clock.advance(&mut state, &TickInput::default(), 0.0625);
        }
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.time_left, 0);

        let ticks = state.time_ticks;
        let steps = clock.advance(&mut state, &TickInput::default(), 0.1);
        assert_eq!(steps, FrameSteps::default());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_partial_second_discarded_on_restart() {
        let mut state = playing();
        let mut clock = FrameClock::new();
        for _ in 0..9 {
            clock.advance(&mut state, &TickInput::default(), 0.1);
        }
        state.return_to_menu();
        clock.advance(&mut state, &TickInput::default(), 0.1);
        state.start_level(0);
        state.enemies.clear();

        // A fresh 0.2s must not complete the old 0.9s
        clock.advance(&mut state, &TickInput::default(), 0.1);
        clock.advance(&mut state, &TickInput::default(), 0.1);
        assert_eq!(state.time_left, crate::sim::LEVELS[0].time_limit);
    }

    #[test]
    fn test_loop_control_stops_and_resumes() {
        let mut control = LoopControl::new();
        let first = control.generation();
        assert!(control.accepts(first));

        control.stop();
        assert!(!control.accepts(first));

        let second = control.resume().expect("stopped loop resumes");
        assert_ne!(first, second);
        assert!(control.accepts(second));
        // A frame queued before the stop must not run a second loop
        assert!(!control.accepts(first));
    }

    #[test]
    fn test_loop_control_resume_while_running_is_noop() {
        let mut control = LoopControl::new();
        assert_eq!(control.resume(), None);
        assert!(control.accepts(control.generation()));
    }
}
