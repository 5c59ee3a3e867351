use lights_out::core::{GameSnapshot, GameState, SessionConfig};
use lights_out::term::{AnchorY, FrameBuffer, GameView, Viewport, HELP_LINES};
use lights_out::types::{GameAction, Outcome, StartPolicy};

fn state(rows: usize, cols: usize, chance: f64) -> GameState {
    let config = SessionConfig {
        rows,
        cols,
        lit_probability: chance,
        start_policy: StartPolicy::AcceptInstantWin,
    };
    GameState::new(config, 1).unwrap()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = state(5, 5, 1.0).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 5 cells * 4 wide + border => 22; 5 * 2 tall + border => 12.
    // Title rows push the frame down by 2.
    let fb = view.render(&snap, Viewport::new(22, 16));

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(21, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_title_and_status() {
    let snap = state(5, 5, 1.0).snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(60, 24));

    let all = screen_text(&fb);
    assert!(all.contains("LIGHTS OUT"));
    assert!(all.contains("LIT 25"));
    assert!(all.contains("? help"));
}

#[test]
fn term_view_lit_and_unlit_cells() {
    let mut gs = state(3, 3, 1.0);
    // Darken the plus shape around the centre.
    gs.apply_action(GameAction::Activate);
    let snap = gs.snapshot();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(14, 12));

    // Frame at (0, 2); inner origin (1, 3); each cell 4x2 with a 1-col gutter.
    // (0, 0) is lit.
    assert_eq!(fb.get(2, 3).unwrap().ch, '█');
    assert_eq!(fb.get(3, 4).unwrap().ch, '█');
    // (0, 1) is dark.
    assert_eq!(fb.get(6, 3).unwrap().ch, '·');
    // (1, 1) is dark and has the cursor brackets.
    assert_eq!(fb.get(5, 5).unwrap().ch, '[');
    assert_eq!(fb.get(6, 5).unwrap().ch, '·');
    assert_eq!(fb.get(8, 5).unwrap().ch, ']');
}

#[test]
fn term_view_shows_winner_instead_of_board() {
    let snap = state(3, 3, 0.0).snapshot();
    assert_eq!(snap.outcome, Outcome::Won);

    let fb = GameView::default().render(&snap, Viewport::new(40, 20));
    let all = screen_text(&fb);
    assert!(all.contains("YOU WIN!"));
    assert!(all.contains("n new game"));
    assert!(!all.contains('┌'));
    assert!(!all.contains("LIGHTS OUT"));
}

#[test]
fn term_view_help_dialog_overlays_board() {
    let mut gs = state(5, 5, 1.0);
    gs.apply_action(GameAction::ToggleHelp);
    let snap = gs.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);
    for line in HELP_LINES.iter().filter(|l| !l.is_empty()) {
        assert!(all.contains(line), "missing help line {:?}", line);
    }
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = state(5, 5, 1.0).snapshot();
    let view = GameView::default();

    // Frame is 12 rows tall plus 4 rows of title/status = 16.
    // start = (30 - 16) / 2 = 7 => frame top-left corner at (0, 9).
    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 9).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_framebuffer() {
    let snap = state(4, 4, 1.0).snapshot();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, Viewport::new(40, 20), &mut fb);
    assert_eq!(fb.width(), 40);
    assert_eq!(fb.height(), 20);
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 20)));
}

#[test]
fn term_view_hit_test_round_trips_through_session() {
    let mut gs = state(5, 5, 1.0);
    let view = GameView::default();
    let vp = Viewport::new(50, 24);

    let snap = gs.snapshot();
    let fb = view.render(&snap, vp);

    // Find the top-left lit glyph of the board and click it.
    let (x, y) = (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .find(|&(x, y)| fb.get(x, y).unwrap().ch == '█')
        .unwrap();
    assert_eq!(view.cell_at(&snap, vp, x, y), Some((0, 0)));

    gs.apply_action(GameAction::ActivateAt { row: 0, col: 0 });
    assert_eq!(gs.grid().lit_count(), 22);
}

#[test]
fn term_view_hit_test_disabled_when_not_playable() {
    let view = GameView::default();
    let vp = Viewport::new(50, 24);

    let won: GameSnapshot = state(3, 3, 0.0).snapshot();
    for y in 0..vp.height {
        for x in 0..vp.width {
            assert_eq!(view.cell_at(&won, vp, x, y), None);
        }
    }

    let mut gs = state(3, 3, 1.0);
    gs.apply_action(GameAction::ToggleHelp);
    let help = gs.snapshot();
    for y in 0..vp.height {
        for x in 0..vp.width {
            assert_eq!(view.cell_at(&help, vp, x, y), None);
        }
    }
}

#[test]
fn term_view_clips_boards_larger_than_the_terminal() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    // 20000 columns: the frame runs off the right edge.
    let wide = state(1, 20_000, 1.0).snapshot();
    let fb = view.render(&wide, vp);
    // Frame 4 rows + 4 rows of title/status => top (24 - 8) / 2 + 2 = 10.
    assert_eq!(fb.get(0, 10).unwrap().ch, '┌');
    assert_eq!(fb.get(2, 11).unwrap().ch, '█');
    assert_eq!(view.cell_at(&wide, vp, 2, 11), Some((0, 0)));

    // 20000 rows: the frame runs off the bottom edge.
    let tall = state(20_000, 1, 1.0).snapshot();
    let fb = view.render(&tall, vp);
    assert_eq!(fb.get(37, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(39, 3).unwrap().ch, '█');
}
