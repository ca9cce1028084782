use std::io::{stdin, stdout, BufRead};

use log::{debug, info};
use tictactoe_tap::{ConsoleView, GameController, Theme};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let theme = Theme::from_env();
    info!("starting with theme {:?}", theme);

    let mut controller = GameController::new(ConsoleView::new(stdout(), theme))?;

    // 0-8 taps a cell, r resets, q quits
    for line in stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "q" => break,
            "r" => controller.on_reset_tapped()?,
            input => match input.parse::<usize>() {
                Ok(index) => {
                    controller.on_cell_tapped(index)?;
                }
                Err(_) => debug!("ignoring input {:?}", input),
            },
        }
    }
    Ok(())
}
