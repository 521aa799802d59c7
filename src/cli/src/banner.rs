//! Start-up banner.

use colored::Colorize;

const BANNER: &str = r#"
  ____      _                 _____                    _
 |  _ \ ___| | __ _ _   _    |  ___|_ _ _   _  ___ ___| |_
 | |_) / _ \ |/ _` | | | |   | |_ / _` | | | |/ __/ _ \ __|
 |  _ <  __/ | (_| | |_| |   |  _| (_| | |_| | (_|  __/ |_
 |_| \_\___|_|\__,_|\__, |   |_|  \__,_|\__,_|\___\___|\__|
                    |___/
"#;

/// Gets the banner lines shown before the prompts.
pub fn lines(network_name: &str) -> Vec<String> {
    vec![
        BANNER.to_string(),
        format!("=== This Script for {} ===", network_name),
        "This script will distribute (ETH) testnet funds to the wallets in the wallet file."
            .to_string(),
    ]
}

/// Prints the banner.
pub fn print(network_name: &str) {
    for line in lines(network_name) {
        println!("{}", line.yellow());
    }
}
