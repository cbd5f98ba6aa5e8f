use std::io::{self, Write};
use std::time::Duration;

use tictactoe_engine::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::GameController;
use crate::input::{Command, HELP_TEXT, parse_command};
use crate::render::{render_board, status_text};

fn print_screen(controller: &GameController) {
    println!();
    println!("{}", render_board(controller.state()));
    println!();
    println!("{}", status_text(controller.state()));
}

fn print_prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn log_game_over(controller: &GameController) {
    if controller.state().status().is_terminal() {
        log!("Game over: {}", status_text(controller.state()));
    }
}

/// Waits the configured delay, then searches on a blocking thread. Input is not read meanwhile.
async fn run_ai_turn(controller: GameController, delay: Duration) -> io::Result<GameController> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let (controller, result) = tokio::task::spawn_blocking(move || {
        let mut controller = controller;
        let result = controller.play_ai_turn();
        (controller, result)
    })
    .await
    .map_err(io::Error::other)?;

    match result {
        Ok(Some((index, _))) => {
            log!(
                "AI ({}) played cell {}",
                controller.difficulty(),
                index + 1
            );
            log_game_over(&controller);
        }
        Ok(None) => log!("AI had no move to play"),
        Err(e) => {
            log!("AI move rejected: {}", e);
            println!("AI move rejected: {}", e);
        }
    }

    Ok(controller)
}

pub async fn run_console_game(mut controller: GameController, ai_delay: Duration) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP_TEXT);
    print_screen(&controller);

    loop {
        print_prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP_TEXT);
                continue;
            }
            Command::Place(index) => {
                let player = controller.state().current_player();
                match controller.handle_cell(index) {
                    Ok(_) => {
                        log!("Player {} played cell {}", player, index + 1);
                        log_game_over(&controller);
                        if controller.is_ai_turn() {
                            print_screen(&controller);
                            println!("AI is thinking...");
                            controller = run_ai_turn(controller, ai_delay).await?;
                        }
                    }
                    Err(e) => {
                        println!("Move rejected: {}", e);
                        continue;
                    }
                }
            }
            Command::Restart => {
                controller.restart();
                log!("Game restarted");
            }
            Command::Mode(opponent) => {
                controller.set_opponent(opponent);
                log!("Opponent set to {:?}, game restarted", opponent);
            }
            Command::Difficulty(difficulty) => {
                controller.set_difficulty(difficulty);
                log!("Difficulty set to {}, game restarted", difficulty);
            }
        }

        print_screen(&controller);
    }

    Ok(())
}
