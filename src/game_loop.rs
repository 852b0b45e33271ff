//! Fixed-rate frame loop
//!
//! One frame is one simulation tick: poll input, tick, route events to audio,
//! present.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::audio::{AudioSink, sound_for};
use crate::consts::TICK_RATE;
use crate::platform::InputSource;
use crate::renderer::{FrameView, Presenter};
use crate::sim::{GameEvent, GameState, tick};

/// Wall-clock length of one frame
pub const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop spends wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep off the rest of each frame
    Fixed,
    /// Run frames back to back
    Unthrottled,
}

/// What a run amounted to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: u64,
    pub lost: bool,
    pub structures_remaining: usize,
    pub shots_fired: u64,
    pub projectiles_destroyed: u64,
}

pub struct FrameLoop<I, P, A> {
    state: GameState,
    input: I,
    presenter: P,
    audio: A,
    pacing: Pacing,
    /// Log a progress line every this many frames (0 disables)
    report_interval: u64,
    summary: RunSummary,
}

impl<I: InputSource, P: Presenter, A: AudioSink> FrameLoop<I, P, A> {
    pub fn new(state: GameState, input: I, presenter: P, audio: A, pacing: Pacing) -> Self {
        let summary = RunSummary {
            seed: state.seed,
            ..Default::default()
        };
        Self {
            state,
            input,
            presenter,
            audio,
            pacing,
            report_interval: 0,
            summary,
        }
    }

    pub fn with_report_interval(mut self, frames: u64) -> Self {
        self.report_interval = frames;
        self
    }

    /// Run one frame. Returns false once the input source asks to close, in
    /// which case nothing was simulated.
    pub fn step(&mut self) -> bool {
        let frame = self.input.poll(&self.state);
        if frame.close_requested {
            return false;
        }

        tick(&mut self.state, &frame.tick_input());
        self.summary.frames += 1;

        let audio = &mut self.audio;
        let summary = &mut self.summary;
        for event in self.state.drain_events() {
            match event {
                GameEvent::ShotFired { .. } => summary.shots_fired += 1,
                GameEvent::ProjectileDestroyed { .. } => summary.projectiles_destroyed += 1,
                _ => {}
            }
            if let Some(effect) = sound_for(&event) {
                audio.play(effect);
            }
        }

        self.presenter.present(&FrameView::new(&self.state));
        true
    }

    /// Run until the input source asks to close
    pub fn run(&mut self) -> RunSummary {
        loop {
            let frame_start = Instant::now();
            if !self.step() {
                break;
            }

            let frames = self.summary.frames;
            if self.report_interval > 0 && frames % self.report_interval == 0 {
                log::debug!(
                    "frame {}: score {}, {} missiles, {} shots, {} explosions, {} structures",
                    frames,
                    self.state.score,
                    self.state.projectiles.len(),
                    self.state.shots.len(),
                    self.state.explosions.len(),
                    self.state.structures_remaining()
                );
            }

            if self.pacing == Pacing::Fixed {
                let elapsed = frame_start.elapsed();
                if elapsed < FRAME {
                    std::thread::sleep(FRAME - elapsed);
                } else {
                    log::warn!(
                        "Frame {} over budget: {:.2}ms",
                        frames,
                        elapsed.as_secs_f64() * 1000.0
                    );
                }
            }
        }

        let summary = self.summary();
        log::info!(
            "Run finished after {} frames: score {}, {} structures left{}",
            summary.frames,
            summary.score,
            summary.structures_remaining,
            if summary.lost { " (game over)" } else { "" }
        );
        summary
    }

    /// Summary of the run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.state.score,
            lost: self.state.lost,
            structures_remaining: self.state.structures_remaining(),
            ..self.summary.clone()
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioManager, SoundEffect};
    use crate::consts::GROUND_Y;
    use crate::platform::{InputFrame, ScriptedInput};
    use crate::renderer::DrawListPresenter;
    use crate::sim::Projectile;
    use glam::{IVec2, Vec2};

    fn frame_loop(
        state: GameState,
        frames: Vec<InputFrame>,
    ) -> FrameLoop<ScriptedInput, DrawListPresenter, AudioManager> {
        FrameLoop::new(
            state,
            ScriptedInput::new(frames),
            DrawListPresenter::new(true),
            AudioManager::new(),
            Pacing::Unthrottled,
        )
    }

    #[test]
    fn test_close_stops_without_ticking() {
        let mut game = frame_loop(GameState::empty(3), vec![InputFrame::close()]);
        let summary = game.run();

        assert_eq!(summary.frames, 0);
        assert_eq!(summary.seed, 3);
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.presenter().frames_presented, 0);
    }

    #[test]
    fn test_frames_tick_and_present() {
        let idle = InputFrame::aim(IVec2::new(640, 300), false);
        let mut game = frame_loop(GameState::empty(3), vec![idle; 5]);
        let summary = game.run();

        assert_eq!(summary.frames, 5);
        assert_eq!(game.state().time_ticks, 5);
        assert_eq!(game.presenter().frames_presented, 5);
        assert!(!game.presenter().last().vertices.is_empty());
    }

    #[test]
    fn test_events_are_routed_to_audio() {
        let mut state = GameState::empty(3);
        // Landed on structure 0, blows up on the first tick
        state.projectiles.push(Projectile::new(
            Vec2::new(160.0, GROUND_Y),
            Vec2::new(0.0, 1.0),
            0,
        ));

        let mut game = frame_loop(state, vec![InputFrame::aim(IVec2::new(640, 300), true)]);
        let summary = game.run();

        assert_eq!(summary.shots_fired, 1);
        assert_eq!(summary.structures_remaining, 5);
        assert_eq!(game.audio().plays(SoundEffect::TurretFire), 1);
        assert_eq!(game.audio().plays(SoundEffect::StructureDestroyed), 1);
        assert!(game.state().events.is_empty());
    }

    #[test]
    fn test_summary_serializes() {
        let game = frame_loop(GameState::empty(9), vec![]);
        let json = serde_json::to_value(game.summary()).unwrap();
        assert_eq!(json["seed"], 9);
        assert_eq!(json["structures_remaining"], 6);
        assert_eq!(json["lost"], false);
    }
}
