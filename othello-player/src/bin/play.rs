//! Interactive human-versus-computer game on the terminal.
//!
//! The human plays Black. Moves are entered in letter-digit notation
//! ("D3"); the computer replies after a short visible delay. The session
//! has no terminal state, so quit with "quit" or end-of-input.

use othello_player::{RandomStrategy, Session};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const COMPUTER_DELAY: Duration = Duration::from_millis(500);

fn main() -> io::Result<()> {
    let mut session = Session::default();
    let mut strategy = RandomStrategy::new();
    let stdin = io::stdin();

    println!("You play Black (#). Enter moves like D3, or 'quit' to stop.");

    loop {
        println!("\n{}\n", session.board());
        let (black, white) = session.score();
        println!("Black {} - {} White. {} to move.", black, white, session.to_move());

        if session.is_computer_turn() {
            thread::sleep(COMPUTER_DELAY);
            if session.play_computer_move(&mut strategy).is_none() {
                println!("The computer has no move.");
            }
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let loc = match input.parse() {
            Ok(loc) => loc,
            Err(_) => {
                println!("Cannot parse that; moves look like D3.");
                continue;
            }
        };

        if session.play(loc).is_err() {
            println!("Illegal move. Legal moves: {}", session.legal_moves());
        }
    }

    Ok(())
}
