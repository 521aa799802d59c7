//! End-of-run summary.

use colored::Colorize;
use faucet_chain::Explorer;
use faucet_core::Outcome;

/// Builds the summary lines for `outcome`, uncolored.
pub fn lines(outcome: &Outcome, explorer: &Explorer) -> Vec<String> {
    let mut lines = Vec::new();
    match outcome {
        Outcome::Complete { transactions } => {
            lines.push(format!(
                "Distribution complete: {} confirmed.",
                transfers(transactions.len())
            ));
        }
        Outcome::Aborted {
            reason,
            transactions,
        } => {
            lines.push(format!("Distribution aborted: {}", reason));
            match transactions.len() {
                0 => {}
                1 => lines.push("1 transfer was already confirmed and is not reversed:".to_string()),
                n => lines.push(format!(
                    "{} transfers were already confirmed and are not reversed:",
                    n
                )),
            }
        }
    }
    for tx in outcome.transactions() {
        lines.push(format!("  {}", explorer.tx_link(tx.as_str())));
    }
    lines
}

fn transfers(count: usize) -> String {
    match count {
        1 => "1 transfer".to_string(),
        n => format!("{} transfers", n),
    }
}

/// Prints the summary for `outcome`.
pub fn print(outcome: &Outcome, explorer: &Explorer) {
    for (i, line) in lines(outcome, explorer).into_iter().enumerate() {
        if i > 0 {
            println!("{}", line);
        } else if outcome.is_complete() {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }
}
