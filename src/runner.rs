//! Fixed-timestep driver
//!
//! Owns one session and turns variable frame time into whole simulation
//! ticks. Input arrives between frames as raw key names and only ever touches
//! the held-action set; each tick reads it as an immutable snapshot.

use std::collections::BTreeSet;

use crate::highscores::{HighScoreEntry, HighScores};
use crate::settings::Settings;
use crate::sim::{GameState, InputState, reset_game, start_game, tick};

/// Frame time is clamped to this many seconds (tab switches, debugger pauses)
const MAX_FRAME_SECONDS: f32 = 0.1;

pub struct Runner {
    pub state: GameState,
    pub input: InputState,
    pub settings: Settings,
    pub high_scores: HighScores,
    /// Board rank of the last finished run, if it placed
    pub last_rank: Option<usize>,
    /// Raw key names currently down, lower-cased
    keys_down: BTreeSet<String>,
    accumulator: f32,
    /// Set once the current run's result has been written to `high_scores`
    recorded: bool,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            input: InputState::new(),
            settings,
            high_scores: HighScores::new(),
            last_rank: None,
            keys_down: BTreeSet::new(),
            accumulator: 0.0,
            recorded: false,
        }
    }

    /// Menu "start" entry point
    pub fn start_game(&mut self) {
        start_game(&mut self.state);
        self.release_all();
        self.accumulator = 0.0;
        self.recorded = false;
        self.last_rank = None;
    }

    /// Menu "reset" entry point: back to the menu, history untouched
    pub fn reset_game(&mut self) {
        reset_game(&mut self.state);
        self.release_all();
        self.accumulator = 0.0;
    }

    /// Whether ticks are currently being scheduled
    pub fn is_running(&self) -> bool {
        self.state.is_playing()
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys_down.insert(key.to_lowercase());
        self.refresh_input();
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys_down.remove(&key.to_lowercase());
        self.refresh_input();
    }

    /// Drop every held key (focus loss, start, reset)
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.input.clear();
    }

    fn refresh_input(&mut self) {
        self.input = self
            .settings
            .key_bindings
            .input_for(self.keys_down.iter().map(String::as_str));
    }

    /// Run as many fixed ticks as `frame_seconds` covers. Returns ticks run.
    ///
    /// Stops early (and drops leftover time) the moment the run ends.
    pub fn advance(&mut self, frame_seconds: f32) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let step = self.settings.step_seconds();
        self.accumulator += frame_seconds.clamp(0.0, MAX_FRAME_SECONDS);

        let mut substeps = 0;
        while self.accumulator >= step && substeps < self.settings.max_substeps {
            let input = self.input;
            tick(&mut self.state, &input);
            self.accumulator -= step;
            substeps += 1;

            if self.state.phase.is_terminal() {
                self.accumulator = 0.0;
                self.record_result();
                break;
            }
        }

        substeps
    }

    fn record_result(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;
        let entry = HighScoreEntry::from_state(&self.state);
        self.last_rank = self.high_scores.add(entry);
        if self.last_rank.is_none() {
            log::debug!("Run score {} did not make the board", self.state.score);
        }
    }
}
