use thiserror::Error;

/// Errors that abort a conversion. Record-level faults (an unparsable
/// transaction amount) are absorbed by the ledger and never show up here.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is not well-formed XML, is not UTF-8, or has no root element
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Opening or closing balance of an account is missing or not a number
    #[error("Invalid {field} for account {account:?}: {value:?}")]
    InvalidBalance {
        account: String,
        field: &'static str,
        value: Option<String>,
    },

    /// Balance is a number, but too large or too precise for `Decimal`
    #[error("{field} for account {account:?} is out of range: {value:?}")]
    BalanceOutOfRange {
        account: String,
        field: &'static str,
        value: String,
    },

    /// A transaction is grouped under an account number the roster never seeded
    #[error("No opening balance for ledger account {0:?}")]
    UnknownLedgerAccount(String),

    /// Workbook serialization failed
    #[error("Failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Reading the input file from disk failed
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was run without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,
}

pub type ConvertResult<T> = Result<T, ConvertError>;
