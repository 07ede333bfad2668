//! End-to-end checks of the per-frame update without a window.
//!
//! These drive `AppState` the way the event loop does: handle events, build a
//! frame, then end it.

use lorenz_viz::{AppEvent, AppState, AttractorState, Config, Key, Parameters};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_first_step_from_classic_start() {
    let mut state = AttractorState::new(0.1, 0.0, 0.0);
    state.step(&Parameters::CLASSIC);

    assert!(approx(state.x, 0.09));
    assert!(approx(state.y, 0.028));
    assert!(approx(state.z, 0.0));
}

#[test]
fn test_each_frame_integrates_exactly_steps_per_frame() {
    let config = Config::default();
    let mut app = AppState::new(&config);
    let mut reference = config.initial_state;

    for _ in 0..3 {
        let len = app.build_frame().trail.len();
        assert_eq!(len, 10_000);
        app.end_frame();

        for _ in 0..10_000 {
            reference.step(&config.parameters);
        }
        assert_eq!(app.attractor, reference);
    }
}

#[test]
fn test_frames_are_deterministic() {
    let config = Config::default();
    let mut a = AppState::new(&config);
    let mut b = AppState::new(&config);

    for _ in 0..2 {
        let trail_a = a.build_frame().trail.to_vec();
        let trail_b = b.build_frame().trail.to_vec();
        assert_eq!(trail_a, trail_b);
        a.end_frame();
        b.end_frame();
    }
    assert_eq!(a.view.model, b.view.model);
}

#[test]
fn test_trail_vertex_mapping() {
    let config = Config::default();
    let mut app = AppState::new(&config);
    let mut expected = config.initial_state;
    expected.step(&config.parameters);

    let frame = app.build_frame();
    let first = frame.trail[0];
    assert!(approx(first.position[0], expected.x * 0.05));
    assert!(approx(first.position[1], expected.y * 0.05));
    assert!(approx(first.position[2], 1.0 - expected.z * 0.05));

    for v in frame.trail {
        assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn test_axis_toggle_twice_restores_state() {
    let mut app = AppState::new(&Config::default());
    let before = app.toggles;
    assert!(!app.build_frame().show_axes);

    app.handle(AppEvent::KeyDown(Key::A));
    assert!(app.build_frame().show_axes);

    app.handle(AppEvent::KeyDown(Key::A));
    assert_eq!(app.toggles, before);
    assert!(!app.build_frame().show_axes);
}

#[test]
fn test_oscillator_bounded_over_many_frames() {
    let config = Config {
        steps_per_frame: 0,
        ..Config::default()
    };
    let mut app = AppState::new(&config);
    let bound = config.oscillator_limit + config.oscillator_step + 1e-3;

    for _ in 0..200_000 {
        app.end_frame();
        let phase = app.view.oscillator.phase;
        assert!(phase > -bound && phase < bound, "phase = {}", phase);
    }
}

#[test]
fn test_empty_frame_when_no_steps() {
    let config = Config {
        steps_per_frame: 0,
        ..Config::default()
    };
    let mut app = AppState::new(&config);
    assert!(app.build_frame().trail.is_empty());
    assert_eq!(app.attractor, config.initial_state);
}
