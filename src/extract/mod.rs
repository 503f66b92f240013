//! Extraction stages. Each one reads the same immutable document tree.

mod header;
mod ledger;
mod roster;
mod summary;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::document::Element;
use crate::errors::ConvertResult;

pub use header::HeaderExtractor;
pub use ledger::LedgerBuilder;
pub use roster::{Roster, RosterBuilder};
pub use summary::SummaryExtractor;

/// Every reported account element.
pub(crate) const ACCOUNTS_PATH: &str = ".//responPermintaan/responData/dataKeuangan/dataRekening";

/// Transactions directly under an account element.
pub(crate) const TRANSACTIONS_PATH: &str = "mutasiRekening";

pub trait Extractor {
    type Output;

    fn extract(self, root: &Element) -> ConvertResult<Self::Output>;
}

pub(crate) fn owned_text(element: &Element, path: &str) -> Option<String> {
    element.find_text(path).map(str::to_string)
}

/// Why a field could not be read as a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// Not a number at all.
    Malformed,
    /// A finite number that `Decimal` cannot hold (beyond 28 digits of
    /// magnitude or precision).
    OutOfRange,
}

/// Reads a decimal the way the source documents write them: surrounding
/// whitespace ignored, plain or scientific notation.
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, NumberError> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| match text.parse::<f64>() {
            Ok(value) if value.is_finite() => NumberError::OutOfRange,
            _ => NumberError::Malformed,
        })
}
