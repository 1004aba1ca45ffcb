//! Linear guessing game over standard input.
//!
//! ```sh
//! cargo run --example guess
//! ```

use io_line::{runtime::run, source::StdinSource};

use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let secret = seed % 100 + 1;

    run(StdinSource::new(), |console| async move {
        console.print_line("I picked a number between 1 and 100, guess it!");

        loop {
            let line = console.read_line().await;

            let guess: u32 = match line.trim().parse() {
                Ok(guess) => guess,
                Err(_) => {
                    console.print_line("Numbers only, try again.");
                    continue;
                }
            };

            if guess < secret {
                console.print_line("Too small.");
            } else if guess > secret {
                console.print_line("Too big.");
            } else {
                console.print_line("You got it!");
                break;
            }
        }
    })
    .unwrap();
}
