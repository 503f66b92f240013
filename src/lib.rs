//! Convert financial-institution disclosure responses (XML) into XLSX reports.
//!
//! ```rust,ignore
//! use ljk_report::ConverterBuilder;
//!
//! let workbook = ConverterBuilder::new()
//!     .content(&xml_bytes)
//!     .convert()?;
//! ```
//!
//! The workbook holds an "INFO RESPON" sheet, a "DAFTAR WP" sheet, the
//! "DAFTAR REKENING" account roster and one "REK-n" ledger per account, with
//! running balances recomputed from each account's opening balance.

mod builder;
mod types;

pub mod document;
pub mod errors;
pub mod extract;
pub mod report;

pub use builder::{ConverterBuilder, convert};
pub use errors::{ConvertError, ConvertResult};
pub use report::Report;
pub use types::{
    AccountRecord, DebitCredit, Ledger, ResponseHeader, SubjectSummary, TransactionRecord,
};
