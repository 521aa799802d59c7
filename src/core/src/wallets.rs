//! Sources of the ordered wallet list.

use crate::errors::CoreError;
use crate::types::Wallet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies the ordered list of wallets for a distribution run.
pub trait WalletSource {
    /// Loads every wallet, in relay order.
    fn load(&self) -> Result<Vec<Wallet>, CoreError>;
}

/// A JSON file holding an array of `{ "address", "privateKey" }` objects.
#[derive(Debug, Clone)]
pub struct JsonWalletFile {
    path: PathBuf,
}

impl JsonWalletFile {
    /// Creates a source backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Gets the path of the wallet file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WalletSource for JsonWalletFile {
    fn load(&self) -> Result<Vec<Wallet>, CoreError> {
        let mut file = File::open(&self.path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let wallets: Vec<Wallet> = serde_json::from_str(&contents)?;
        debug!("Read {} wallets from {}", wallets.len(), self.path.display());
        Ok(wallets)
    }
}

impl WalletSource for Vec<Wallet> {
    fn load(&self) -> Result<Vec<Wallet>, CoreError> {
        Ok(self.clone())
    }
}
