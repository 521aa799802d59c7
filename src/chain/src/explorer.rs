//! Block explorer links for submitted transactions.

/// Builds transaction links for a block explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    tx_url: String,
}

impl Explorer {
    /// Creates an explorer from the URL prefix of its transaction pages,
    /// e.g. `https://sepolia.basescan.org/tx/`.
    pub fn new(tx_url: impl Into<String>) -> Self {
        Self {
            tx_url: tx_url.into(),
        }
    }

    /// Gets the link to the page of `tx_hash`.
    pub fn tx_link(&self, tx_hash: &str) -> String {
        if self.tx_url.ends_with('/') {
            format!("{}{}", self.tx_url, tx_hash)
        } else {
            format!("{}/{}", self.tx_url, tx_hash)
        }
    }
}
