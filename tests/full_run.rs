//! Headless runs of the whole loop with the autopilot playing

use missile_command::audio::{AudioManager, SoundEffect};
use missile_command::consts::*;
use missile_command::platform::{Autopilot, InputFrame, InputSource};
use missile_command::renderer::{DrawListPresenter, FrameView, Presenter};
use missile_command::sim::{GameState, TickInput, tick};
use missile_command::{FrameLoop, Pacing};

#[test]
fn test_autopilot_run_is_deterministic() {
    let run = |seed| {
        let mut game = FrameLoop::new(
            GameState::new(seed),
            Autopilot::new(Some(3000), 0),
            DrawListPresenter::new(true),
            AudioManager::new(),
            Pacing::Unthrottled,
        );
        game.run()
    };

    let first = run(7);
    assert_eq!(first, run(7));
    assert_eq!(first.frames, 3000);
    assert!(first.shots_fired > 0);
    assert!(first.shots_fired <= 3000 / RELOAD_DURATION_TICKS as u64 + 1);
}

#[test]
fn test_autopilot_run_holds_invariants() {
    let mut state = GameState::new(2024);
    let mut pilot = Autopilot::new(Some(6000), 60);
    let mut presenter = DrawListPresenter::new(false);

    let mut last_score = 0;
    let mut was_lost = false;
    let mut destroyed_before = 0;
    loop {
        let frame: InputFrame = pilot.poll(&state);
        if frame.close_requested {
            break;
        }
        tick(&mut state, &TickInput { cursor: frame.cursor, fire: frame.fire });

        assert!(state.score >= last_score);
        last_score = state.score;

        // Never un-lost, and lost exactly when nothing stands
        assert!(!was_lost || state.lost);
        assert_eq!(state.lost, state.structures_remaining() == 0);
        was_lost = state.lost;

        let destroyed = STRUCTURE_COUNT - state.structures_remaining();
        assert!(destroyed >= destroyed_before);
        destroyed_before = destroyed;

        for explosion in &state.explosions {
            assert!(explosion.ticks <= EXPLOSION_LIFETIME_TICKS + 1);
        }
        for shot in &state.shots {
            assert!(shot.distance_travelled <= shot.travel_distance);
        }
        for projectile in &state.projectiles {
            assert!(projectile.pos.y <= GROUND_Y + projectile.vel.y);
            assert!(projectile.target < STRUCTURE_COUNT);
        }
        assert!(state.turret.aim_point.y <= NO_FIRE_ZONE_TOP);
        assert!(state.turret.reload_bar <= RELOAD_BAR_SIZE);

        presenter.present(&FrameView::new(&state));
        let list = presenter.last();
        assert_eq!(list.labels.len(), if state.lost { 2 } else { 1 });
        state.events.clear();
    }
    assert!(state.time_ticks > 0);
}

#[test]
fn test_undefended_game_is_lost_and_lingers() {
    // Never fires: every missile lands
    struct Idle;
    impl InputSource for Idle {
        fn poll(&mut self, state: &GameState) -> InputFrame {
            if state.lost && state.explosions.is_empty() {
                InputFrame::close()
            } else {
                InputFrame::aim(TURRET_POSITION.as_ivec2(), false)
            }
        }
    }

    let mut game = FrameLoop::new(
        GameState::new(11),
        Idle,
        DrawListPresenter::new(true),
        AudioManager::new(),
        Pacing::Unthrottled,
    );
    let summary = game.run();

    assert!(summary.lost);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.structures_remaining, 0);
    assert_eq!(summary.shots_fired, 0);
    assert!(game.audio().plays(SoundEffect::StructureDestroyed) >= STRUCTURE_COUNT as u64);
    assert_eq!(game.audio().plays(SoundEffect::TurretFire), 0);
}
