use lib_policies::{OptimalPolicy, RandomPolicy};
use lib_round::{RoundConfig, RoundController, RoundObserver, RoundPhase};
use lib_tic_tac_toe::{Mark, MovePolicy, RoundOutcome};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Pause before a computer reply is shown, so it reads as a turn
/// rather than an instant echo.
const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(400);

/// Pause between the outcome announcement and the next round.
const ROUND_RESET_DELAY: Duration = Duration::from_millis(1_000);

#[derive(Copy, Clone, Debug, PartialEq)]
enum Mode {
    Unbeatable,
    Random,
    TwoPlayer,
}

/// Display names for each side.
#[derive(Clone)]
struct Labels {
    x: String,
    o: String,
}

impl Labels {
    fn for_mark(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

/// Prints moves and outcomes as the round advances.
struct ConsoleObserver {
    labels: Labels,
    computer_mark: Option<Mark>,
}

impl RoundObserver for ConsoleObserver {
    fn move_applied(&mut self, index: usize, mark: Mark) {
        if self.computer_mark == Some(mark) {
            thread::sleep(COMPUTER_MOVE_DELAY);
        }

        println!("{} takes cell {}.", self.labels.for_mark(mark), index);
    }

    fn round_over(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win(winner) => println!("{} wins!", self.labels.for_mark(winner)),
            RoundOutcome::Draw => println!("It's a draw!"),
            RoundOutcome::Ongoing => {}
        }
    }
}

fn main() {
    let mode = match std::env::args().nth(1).as_deref() {
        None | Some("unbeatable") => Mode::Unbeatable,
        Some("random") => Mode::Random,
        Some("two-player") => Mode::TwoPlayer,
        Some(other) => {
            eprintln!(
                "Unknown mode: {}. Expected unbeatable, random, or two-player.",
                other
            );
            std::process::exit(1);
        }
    };

    let (config, labels, computer_mark) = configure(mode);

    let observer = ConsoleObserver {
        labels: labels.clone(),
        computer_mark,
    };

    let mut controller = RoundController::with_observer(Box::new(observer));
    controller.start(config);

    play(&mut controller, &labels);
}

/// Builds the round wiring for the chosen mode, prompting for names
/// and symbols where the mode calls for it.
fn configure(mode: Mode) -> (RoundConfig, Labels, Option<Mark>) {
    match mode {
        Mode::Unbeatable => {
            let name = prompt_name();
            let human_mark = prompt_symbol();
            let computer_mark = human_mark.opponent();

            let policy: Box<dyn MovePolicy> = Box::new(OptimalPolicy::new(computer_mark));
            let config = match computer_mark {
                Mark::X => RoundConfig {
                    first_mover: Mark::X,
                    x_policy: Some(policy),
                    o_policy: None,
                },
                Mark::O => RoundConfig {
                    first_mover: Mark::X,
                    x_policy: None,
                    o_policy: Some(policy),
                },
            };

            let labels = match human_mark {
                Mark::X => Labels {
                    x: name,
                    o: "Computer".to_string(),
                },
                Mark::O => Labels {
                    x: "Computer".to_string(),
                    o: name,
                },
            };

            (config, labels, Some(computer_mark))
        }
        Mode::Random => {
            if prompt_two_player() {
                return configure(Mode::TwoPlayer);
            }

            let name = prompt_name();
            let config = RoundConfig {
                first_mover: Mark::X,
                x_policy: None,
                o_policy: Some(Box::new(RandomPolicy::from_entropy())),
            };
            let labels = Labels {
                x: name,
                o: "Computer".to_string(),
            };

            (config, labels, Some(Mark::O))
        }
        Mode::TwoPlayer => {
            let labels = Labels {
                x: "Player X".to_string(),
                o: "Player O".to_string(),
            };

            (RoundConfig::two_human(), labels, None)
        }
    }
}

/// Drives rounds until the player quits.
fn play(controller: &mut RoundController, labels: &Labels) {
    loop {
        match controller.phase() {
            RoundPhase::AwaitingMove(mark) => {
                println!("\n{}\n", controller.board());

                let input = prompt(&format!(
                    "{} ({}), enter a cell 0-8 (q to quit): ",
                    labels.for_mark(mark),
                    mark
                ));

                if input == "q" {
                    return;
                }

                match input.parse::<usize>() {
                    Ok(index) => {
                        if controller.board().is_vacant(index) != Ok(true) {
                            println!("That cell isn't available.");
                        }
                        controller.submit_move(index);
                    }
                    Err(_) => println!("Invalid input.  Try again."),
                }
            }
            RoundPhase::RoundOver(_) => {
                println!("\n{}", controller.board());

                thread::sleep(ROUND_RESET_DELAY);
                controller.finish_round();

                let scores = controller.scores();
                println!(
                    "\nScore: {} {} | {} {} | draws {}",
                    labels.x,
                    scores.wins_for(Mark::X),
                    labels.o,
                    scores.wins_for(Mark::O),
                    scores.draws()
                );
            }
            RoundPhase::Idle => return,
        }
    }
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().expect("couldn't flush stdout");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("couldn't capture user input");

    input.trim().to_string()
}

fn prompt_name() -> String {
    let name = prompt("Enter your name [Player]: ");

    if name.is_empty() {
        "Player".to_string()
    } else {
        name
    }
}

fn prompt_symbol() -> Mark {
    loop {
        let input = prompt("Play as X or O? [X]: ");

        match input.to_uppercase().as_str() {
            "" | "X" => return Mark::X,
            "O" => return Mark::O,
            _ => println!("Invalid input.  Try again."),
        }
    }
}

fn prompt_two_player() -> bool {
    loop {
        let input = prompt("1) vs computer  2) two players [1]: ");

        match input.as_str() {
            "" | "1" => return false,
            "2" => return true,
            _ => println!("Invalid input.  Try again."),
        }
    }
}
