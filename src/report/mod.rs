//! The assembled report and its workbook serialization.

mod sheet;
mod workbook;

use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::Element;
use crate::errors::ConvertResult;
use crate::extract::{Extractor, HeaderExtractor, LedgerBuilder, RosterBuilder, SummaryExtractor};
use crate::types::{AccountRecord, Ledger, ResponseHeader, SubjectSummary};

pub use sheet::{
    Cell, INFO_SHEET, LEDGER_SHEET_PREFIX, ROSTER_SHEET, SUBJECT_SHEET, SheetRow, ledger_sheet_name,
};

/// Every table extracted from one response document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub header: ResponseHeader,
    pub summary: SubjectSummary,
    pub accounts: Vec<AccountRecord>,
    /// One entry per distinct grouping key, in first-seen order.
    pub ledgers: Vec<Ledger>,
}

impl Report {
    /// Parses the document and runs every extraction stage in order.
    pub fn from_xml(content: &[u8]) -> ConvertResult<Self> {
        let root = Element::parse(content)?;
        Self::from_document(&root)
    }

    pub fn from_document(root: &Element) -> ConvertResult<Self> {
        let header = HeaderExtractor.extract(root)?;
        let summary = SummaryExtractor.extract(root)?;
        let roster = RosterBuilder.extract(root)?;
        let ledgers = LedgerBuilder::new(roster.opening_balances).extract(root)?;

        Ok(Report {
            header,
            summary,
            accounts: roster.accounts,
            ledgers,
        })
    }

    /// Sheet names in the order they are written.
    pub fn sheet_names(&self) -> Vec<String> {
        [INFO_SHEET, SUBJECT_SHEET, ROSTER_SHEET]
            .into_iter()
            .map(str::to_string)
            .chain((1..=self.ledgers.len()).map(ledger_sheet_name))
            .collect()
    }

    /// Serializes the report into an XLSX workbook held in memory.
    pub fn to_workbook(&self) -> ConvertResult<Vec<u8>> {
        let mut book = Workbook::new();

        workbook::write_sheet(&mut book, INFO_SHEET, std::slice::from_ref(&self.header))?;
        workbook::write_sheet(&mut book, SUBJECT_SHEET, std::slice::from_ref(&self.summary))?;
        workbook::write_sheet(&mut book, ROSTER_SHEET, &self.accounts)?;

        for (index, ledger) in self.ledgers.iter().enumerate() {
            let name = ledger_sheet_name(index + 1);
            debug!(
                sheet = %name,
                account = ?ledger.account_number,
                rows = ledger.transactions.len(),
                "writing ledger sheet"
            );
            workbook::write_sheet(&mut book, &name, &ledger.transactions)?;
        }

        let bytes = book.save_to_buffer()?;
        info!(
            accounts = self.accounts.len(),
            ledgers = self.ledgers.len(),
            bytes = bytes.len(),
            "workbook assembled"
        );
        Ok(bytes)
    }
}
