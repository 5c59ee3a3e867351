//! Terminal Lights Out runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `lights_out::term`. The loop is event driven: nothing changes between
//! inputs, so it blocks on the next event and redraws only after one.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use lights_out::config::{Command, GameConfig, USAGE};
use lights_out::core::{GameSnapshot, GameState};
use lights_out::input::{click_position, handle_key_event, should_quit};
use lights_out::logging;
use lights_out::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use lights_out::types::GameAction;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GameConfig::load(&args)? {
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        Command::Play(config) => config,
    };

    logging::init(config.log_path.as_deref())?;
    for w in &config.warnings {
        warn!("{}", w);
    }

    let seed = config.seed_or_clock();
    info!(
        "starting {}x{} board, chance {}, seed {}, {:?}",
        config.rows, config.cols, config.lit_probability, seed, config.start_policy
    );
    let mut game = GameState::new(config.session(), seed).context("invalid board settings")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                    dirty = true;
                }
            }
            Event::Mouse(mouse) => {
                let cell = click_position(mouse)
                    .and_then(|(x, y)| view.cell_at(&snap, viewport, x, y));
                if let Some((row, col)) = cell {
                    game.apply_action(GameAction::ActivateAt { row, col });
                    dirty = true;
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
