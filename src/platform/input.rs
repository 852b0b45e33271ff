//! Input boundary

use std::collections::VecDeque;

use glam::IVec2;

use crate::sim::{GameState, TickInput};

/// Raw input sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    /// Pointer position in window coordinates
    pub cursor: IVec2,
    /// Primary button is down
    pub fire: bool,
    /// The window was asked to close
    pub close_requested: bool,
}

impl InputFrame {
    pub fn aim(cursor: IVec2, fire: bool) -> Self {
        Self {
            cursor,
            fire,
            close_requested: false,
        }
    }

    pub fn close() -> Self {
        Self {
            close_requested: true,
            ..Default::default()
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            cursor: self.cursor,
            fire: self.fire,
        }
    }
}

/// Something that produces one `InputFrame` per frame.
///
/// Sources that play on the user's behalf may look at the game; device-backed
/// sources ignore it.
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> InputFrame;
}

/// Replays a fixed list of frames, then asks to close
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> InputFrame {
        self.frames.pop_front().unwrap_or_else(InputFrame::close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_closes_when_exhausted() {
        let state = GameState::empty(1);
        let mut input = ScriptedInput::new([
            InputFrame::aim(IVec2::new(10, 20), true),
            InputFrame::aim(IVec2::new(30, 40), false),
        ]);

        let first = input.poll(&state);
        assert_eq!(first.tick_input(), TickInput { cursor: IVec2::new(10, 20), fire: true });
        assert!(!input.poll(&state).close_requested);
        assert_eq!(input.remaining(), 0);
        assert!(input.poll(&state).close_requested);
    }
}
