//! Native currency amounts.
//!
//! Amounts are held in wei (10^-18 of one unit) so that per-wallet amounts and
//! their multiples stay exact. Rounding to six decimal places only happens
//! when an amount is rendered for an executor with [`EtherAmount::to_fixed`].

use crate::errors::CoreError;
use std::fmt;

/// Number of wei in one unit of the native currency.
pub const WEI_PER_UNIT: u128 = 1_000_000_000_000_000_000;

/// Number of wei in one micro-unit, the precision of [`EtherAmount::to_fixed`].
pub const WEI_PER_MICRO: u128 = 1_000_000_000_000;

/// Symbol used when logging native currency amounts.
pub const NATIVE_SYMBOL: &str = "ETH";

const DECIMALS: usize = 18;

/// A positive amount of the native currency, stored in wei.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EtherAmount(u128);

impl EtherAmount {
    /// Creates an amount from a count of wei.
    pub const fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    /// Gets the amount in wei.
    pub const fn wei(&self) -> u128 {
        self.0
    }

    /// Parses an operator-supplied decimal amount.
    ///
    /// Plain decimals are read exactly, digits past the 18th decimal are
    /// dropped. Other float notations (`1e-3`) go through `f64`. Anything that
    /// is not a finite number of at least one wei is rejected.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let wei = match parse_plain_decimal(trimmed) {
            Some(wei) => wei,
            None => {
                let value: f64 = trimmed.parse().map_err(|_| {
                    CoreError::InvalidAmount(format!("'{}' is not a number", trimmed))
                })?;
                if !value.is_finite() || value <= 0.0 {
                    return Err(CoreError::InvalidAmount(format!(
                        "'{}' is not a positive number",
                        trimmed
                    )));
                }
                parse_plain_decimal(&format!("{:.18}", value)).ok_or_else(|| {
                    CoreError::InvalidAmount(format!("'{}' is too large", trimmed))
                })?
            }
        };

        if wei == 0 {
            return Err(CoreError::InvalidAmount(format!(
                "'{}' is not a positive number",
                trimmed
            )));
        }
        Ok(Self(wei))
    }

    /// Multiplies the amount by a wallet count.
    pub fn checked_mul(&self, factor: u64) -> Result<Self, CoreError> {
        self.0
            .checked_mul(u128::from(factor))
            .map(Self)
            .ok_or_else(|| CoreError::AmountOverflow {
                amount: self.to_string(),
                factor,
            })
    }

    /// Formats the amount rounded half-up to six decimal places, e.g. `0.003000`.
    pub fn to_fixed(&self) -> String {
        let round_up = self.0 % WEI_PER_MICRO >= WEI_PER_MICRO / 2;
        let micros = self.0 / WEI_PER_MICRO + u128::from(round_up);
        format!("{}.{:06}", micros / 1_000_000, micros % 1_000_000)
    }
}

impl fmt::Display for EtherAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WEI_PER_UNIT;
        let frac = self.0 % WEI_PER_UNIT;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:018}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

/// Reads `[digits][.digits]` into wei. `None` for anything else or on overflow.
fn parse_plain_decimal(s: &str) -> Option<u128> {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole_wei = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().ok()?.checked_mul(WEI_PER_UNIT)?
    };

    let frac = &frac[..frac.len().min(DECIMALS)];
    let frac_wei = if frac.is_empty() {
        0
    } else {
        frac.parse::<u128>().ok()? * 10u128.pow((DECIMALS - frac.len()) as u32)
    };

    whole_wei.checked_add(frac_wei)
}
