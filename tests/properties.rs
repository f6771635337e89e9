use cosmic_jumper::consts::*;
use cosmic_jumper::sim::{Action, GameState, InputState, Level, items, levels, start_game, tick};
use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, jump, attack)| {
            let mut input = InputState::new();
            for (held, action) in [
                (left, Action::Left),
                (right, Action::Right),
                (jump, Action::Jump),
                (attack, Action::Attack),
            ] {
                if held {
                    input.press(action);
                }
            }
            input
        },
    )
}

fn arb_level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::City), Just(Level::Clouds), Just(Level::Boss)]
}

fn session_on(level: Level) -> GameState {
    let mut state = GameState::new();
    start_game(&mut state);
    state.level = level;
    state.entities = levels::layout(level);
    state
}

proptest! {
    #[test]
    fn health_and_x_stay_in_bounds(
        level in arb_level(),
        inputs in prop::collection::vec(arb_input(), 1..400),
    ) {
        let mut state = session_on(level);
        for input in &inputs {
            tick(&mut state, input);
            let player = &state.player;
            prop_assert!(player.health >= 0 && player.health <= player.max_health);
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x <= CANVAS_WIDTH - player.size.x);
            if let Some(boss) = &state.entities.boss {
                prop_assert!(boss.health >= 0 && boss.health <= boss.max_health);
            }
        }
    }

    #[test]
    fn identical_inputs_identical_runs(
        level in arb_level(),
        inputs in prop::collection::vec(arb_input(), 1..300),
    ) {
        let mut a = session_on(level);
        let mut b = session_on(level);
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
            prop_assert_eq!(&a.player, &b.player);
            prop_assert_eq!(&a.entities, &b.entities);
            prop_assert_eq!(a.phase, b.phase);
        }
    }

    #[test]
    fn score_and_coins_never_decrease(
        inputs in prop::collection::vec(arb_input(), 1..400),
    ) {
        let mut state = session_on(Level::City);
        let (mut score, mut coins) = (0, 0);
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.score >= score);
            prop_assert!(state.coins >= coins);
            score = state.score;
            coins = state.coins;
        }
    }

    #[test]
    fn collecting_twice_changes_nothing(x in 0.0f32..760.0, y in 0.0f32..550.0) {
        let mut store = levels::layout(Level::Clouds);
        let player = cosmic_jumper::sim::Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT);
        items::collect(&mut store.collectibles, &player);
        let after_first = store.clone();
        let second = items::collect(&mut store.collectibles, &player);
        prop_assert!(second.is_empty());
        prop_assert_eq!(store, after_first);
    }
}
