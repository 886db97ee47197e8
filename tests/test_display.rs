use flappy_term::compute::init_state;
use flappy_term::config::GameConfig;
use flappy_term::display::*;
use flappy_term::entities::*;

fn rendered(state: &GameState, viewport: Viewport, best: u32) -> String {
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, state, &GameConfig::default(), viewport, best).unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

fn viewport() -> Viewport {
    // 40×20 playfield cells inside the frame
    Viewport::new(42, 24)
}

#[test]
fn viewport_inner_dimensions() {
    let v = viewport();
    assert_eq!(v.inner_cols(), 40);
    assert_eq!(v.inner_rows(), 20);
    assert!(v.fits_playfield());
    assert!(!Viewport::new(2, 24).fits_playfield());
    assert!(!Viewport::new(42, 4).fits_playfield());
}

#[test]
fn corners_map_inside_border() {
    let c = GameConfig::default();
    let v = viewport();
    assert_eq!(v.to_cell(0.0, 0.0, &c), (1, 2));
    assert_eq!(v.to_cell(399.9, 599.9, &c), (40, 21));
    assert_eq!(v.to_cell(400.0, 600.0, &c), (40, 21));
}

#[test]
fn obstacle_span_columns() {
    let c = GameConfig::default();
    let v = viewport();
    assert_eq!(v.to_col(200.0, &c), 21);
    assert_eq!(v.end_col(260.0, &c), 26);
    assert_eq!(v.end_col(255.0, &c), 26);
    assert_eq!(v.end_col(400.0, &c), 40);
}

#[test]
fn out_of_bounds_points_are_clamped() {
    let c = GameConfig::default();
    let v = viewport();
    assert_eq!(v.to_cell(-50.0, -1.0, &c), (1, 2));
    assert_eq!(v.to_cell(1_000.0, 900.0, &c), (40, 21));
}

#[test]
fn bird_start_position_maps_to_cell() {
    let c = GameConfig::default();
    let v = viewport();
    // x 50/400 of 40 cols → col 5 (+1 border); y 300/600 of 20 rows → row 10 (+2)
    assert_eq!(v.to_cell(c.bird_x, 300.0, &c), (6, 12));
}

#[test]
fn hud_shows_score() {
    let mut s = init_state(&GameConfig::default());
    s.score = 7;
    let out = rendered(&s, viewport(), 0);
    assert!(out.contains("Score:   7"));
}

#[test]
fn hud_hides_best_before_any_points() {
    let s = init_state(&GameConfig::default());
    assert!(!rendered(&s, viewport(), 0).contains("Best:"));
}

#[test]
fn hud_shows_best_when_known() {
    let s = init_state(&GameConfig::default());
    let out = rendered(&s, viewport(), 12);
    assert!(out.contains("Best:  12"));
}

#[test]
fn overlay_only_when_over() {
    let mut s = init_state(&GameConfig::default());
    assert!(!rendered(&s, viewport(), 0).contains("GAME  OVER"));

    s.is_over = true;
    s.score = 3;
    let out = rendered(&s, viewport(), 10);
    assert!(out.contains("GAME  OVER"));
    assert!(out.contains("Final Score:    3"));
    assert!(out.contains("Best Score:    10"));
    assert!(out.contains("R - Play Again"));
}

#[test]
fn overlay_announces_new_best() {
    let mut s = init_state(&GameConfig::default());
    s.is_over = true;
    s.score = 11;
    let out = rendered(&s, viewport(), 10);
    assert!(out.contains("NEW BEST:   11"));
}

#[test]
fn obstacles_are_drawn_as_solid_bands() {
    let mut s = init_state(&GameConfig::default());
    assert!(!rendered(&s, viewport(), 0).contains('█'));

    s.obstacles.push(Obstacle {
        x: 200.0,
        gap_top: 200.0,
        gap_bottom: 400.0,
        scored: false,
    });
    let out = rendered(&s, viewport(), 0);
    // 60 units of 400 across 40 cols → 6 cells wide
    assert!(out.contains("██████"));
}

#[test]
fn offscreen_obstacle_is_skipped() {
    let mut s = init_state(&GameConfig::default());
    s.obstacles.push(Obstacle {
        x: -60.0,
        gap_top: 200.0,
        gap_bottom: 400.0,
        scored: true,
    });
    assert!(!rendered(&s, viewport(), 0).contains('█'));
}

#[test]
fn tiny_terminal_gets_a_message() {
    let s = init_state(&GameConfig::default());
    let out = rendered(&s, Viewport::new(2, 2), 0);
    assert!(out.contains("Terminal too small"));
    assert!(!out.contains("Score:"));
}
