//! Deals a table and prints it. Press Enter to deal again.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{RandomShuffle, deal, hand_value, render};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut shuffle = RandomShuffle::seeded(seed);

    loop {
        let state = deal(&mut shuffle);
        println!("{}", render(&state));

        let dealer = hand_value(&state.dealer);
        println!("(dealer holds {} {})", dealer.qualifier, dealer.total);

        print!("Enter to deal again, q to quit: ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }
        if matches!(input.trim(), "q" | "quit") {
            break;
        }
        println!();
    }
}
