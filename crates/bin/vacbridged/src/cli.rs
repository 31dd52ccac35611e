//! Interactive assistant console.
//!
//! Reads one query per line from stdin and prints the reply, bypassing the
//! vacuum state machine entirely. Handy for checking what the assistant
//! actually answers before wiring a phrase into a command.

use tokio::io::{AsyncBufReadExt, BufReader};
use vacbridge_app::ports::Assistant;

/// Run the console loop until stdin closes.
///
/// Replies without any text (the assistant answered with a card only) are
/// swallowed rather than printed as empty lines.
///
/// # Errors
///
/// Returns an error when reading from stdin fails.
pub async fn run(assistant: impl Assistant) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        println!("<you> {query}");
        match assistant.assist(query).await {
            Ok(exchange) => {
                let text = exchange.text();
                if !text.is_empty() {
                    println!("<@assistant> {text}");
                }
            }
            Err(err) => eprintln!("exchange failed: {err}"),
        }
    }
    Ok(())
}
