use flappy_term::entities::*;

#[test]
fn input_defaults_to_none() {
    assert_eq!(Input::default(), Input::None);
    assert_ne!(Input::Jump, Input::Reset);
}

#[test]
fn obstacle_geometry() {
    let o = Obstacle {
        x: 120.0,
        gap_top: 150.0,
        gap_bottom: 350.0,
        scored: false,
    };
    assert_eq!(o.trailing_edge(60.0), 180.0);
    assert_eq!(o.gap_center(), 250.0);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        bird_y: 300.0,
        bird_velocity: 0.0,
        obstacles: Vec::new(),
        score: 0,
        is_over: false,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird_y = 10.0;
    cloned.score = 999;
    cloned.obstacles.push(Obstacle {
        x: 400.0,
        gap_top: 0.0,
        gap_bottom: 200.0,
        scored: false,
    });

    assert_eq!(original.bird_y, 300.0);
    assert_eq!(original.score, 0);
    assert!(original.obstacles.is_empty());
    assert_ne!(original, cloned);
}
