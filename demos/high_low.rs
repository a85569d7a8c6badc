//! Plays one round of High Low and prints it.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use highlow::{CardGameTracker, HighLow};

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut tracker = CardGameTracker::stdout();
    let mut game = HighLow::new(seed);
    game.set_delegate(&mut tracker);
    game.start();

    match game.play() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Play error: {err}");
            ExitCode::FAILURE
        }
    }
}
