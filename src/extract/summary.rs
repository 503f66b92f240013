use tracing::debug;

use super::{ACCOUNTS_PATH, Extractor, owned_text};
use crate::document::Element;
use crate::errors::ConvertResult;
use crate::types::SubjectSummary;

const SUBJECT: &str = ".//responPermintaan/responData";

/// Pulls the subject identity. `record_count` counts account elements, which
/// is what downstream consumers of the "jml_data" column expect.
pub struct SummaryExtractor;

impl Extractor for SummaryExtractor {
    type Output = SubjectSummary;

    fn extract(self, root: &Element) -> ConvertResult<Self::Output> {
        let subject = |field: &str| owned_text(root, &format!("{SUBJECT}/{field}"));

        let summary = SubjectSummary {
            tax_id: subject("npwp"),
            name: subject("namaWp"),
            national_id: subject("nik").unwrap_or_default(),
            customer_status: subject("statusNasabah"),
            record_count: root.find_all(ACCOUNTS_PATH).len(),
        };

        debug!(records = summary.record_count, "extracted subject summary");
        Ok(summary)
    }
}
