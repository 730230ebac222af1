//! Terminal Tetris entrypoint.
//!
//! A fixed-cadence, single-threaded loop: sleep one tick, poll input,
//! advance the simulation, compose and present a frame. The loop ends on
//! game over or a quit key, and the terminal is always restored before the
//! final summary is printed.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use term_tetris::core::Game;
use term_tetris::input;
use term_tetris::term::{FrameBuffer, GameView, TerminalRenderer};
use term_tetris::types::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_MS};

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if game.is_game_over() {
        let progress = game.progress();
        println!("Game Over!");
        println!("Final Score: {}", progress.score());
        println!("Lines Cleared: {}", progress.lines());
        println!("Level Reached: {}", progress.level());
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::new();
    let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    while !game.is_game_over() {
        thread::sleep(Duration::from_millis(TICK_MS));

        let polled = input::poll_keys()?;
        if polled.quit {
            break;
        }

        game.tick(polled.keys);
        view.render(game, &mut fb);
        term.present(&fb)?;
    }
    Ok(())
}
