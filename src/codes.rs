//! Human-facing secondary identifiers (VIN for cars, SKU for menu items).
//!
//! A [`CodeSequence`] is a counter plus a format. The counter starts at [`CodeSequence::SEED`]
//! when the process starts, advances on every generated code and is never persisted, so
//! codes repeat across restarts. Nothing checks generated codes against caller-supplied ones.

use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed prefix of generated VINs.
pub const VIN_PREFIX: &str = "1M8GDM9A_";

/// Fixed prefix of generated SKUs.
pub const SKU_PREFIX: &str = "DNG-";

/// Process-wide code counter for one resource.
///
/// Owned by the resource's actor as its context, so only that actor ever advances it.
#[derive(Debug)]
pub struct CodeSequence {
    counter: AtomicU64,
    format: fn(u64) -> String,
}

impl CodeSequence {
    /// Starting value of every sequence.
    pub const SEED: u64 = 1000;

    pub fn new(format: fn(u64) -> String) -> Self {
        Self::starting_at(Self::SEED, format)
    }

    pub fn starting_at(start: u64, format: fn(u64) -> String) -> Self {
        Self {
            counter: AtomicU64::new(start),
            format,
        }
    }

    /// Sequence producing `1M8GDM9A_<n>`.
    pub fn vin() -> Self {
        Self::new(vin_code)
    }

    /// Sequence producing `DNG-<yyMM>-<n>`.
    pub fn sku() -> Self {
        Self::new(sku_code)
    }

    /// Formats the current counter value, then advances it.
    pub fn next_code(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        (self.format)(n)
    }

    /// The value the next generated code will use.
    pub fn peek(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

pub fn vin_code(n: u64) -> String {
    format!("{VIN_PREFIX}{n}")
}

/// SKU stamped with the local year-month.
pub fn sku_code(n: u64) -> String {
    sku_code_on(Local::now().date_naive(), n)
}

pub fn sku_code_on(date: NaiveDate, n: u64) -> String {
    format!("{SKU_PREFIX}{}-{n}", date.format("%y%m"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin_sequence_starts_at_seed_and_advances() {
        let seq = CodeSequence::vin();
        assert_eq!(seq.next_code(), "1M8GDM9A_1000");
        assert_eq!(seq.next_code(), "1M8GDM9A_1001");
        assert_eq!(seq.peek(), 1002);
    }

    #[test]
    fn test_sku_format_uses_two_digit_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(sku_code_on(date, 1000), "DNG-2403-1000");
    }

    #[test]
    fn test_sku_sequence_shares_counter_contract() {
        let seq = CodeSequence::starting_at(7, sku_code);
        let first = seq.next_code();
        let second = seq.next_code();
        assert!(first.starts_with(SKU_PREFIX));
        assert!(first.ends_with("-7"));
        assert!(second.ends_with("-8"));
    }
}
