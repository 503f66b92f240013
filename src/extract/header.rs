use tracing::debug;

use super::{Extractor, owned_text};
use crate::document::Element;
use crate::errors::ConvertResult;
use crate::types::ResponseHeader;

const INSTITUTION: &str = ".//lembagaJasaKeuangan";
const RESPONSE_LETTER: &str = ".//suratJawaban";

/// Pulls the institution and response metadata. Never fails: absent fields stay `None`.
pub struct HeaderExtractor;

impl Extractor for HeaderExtractor {
    type Output = ResponseHeader;

    fn extract(self, root: &Element) -> ConvertResult<Self::Output> {
        let institution = |field: &str| owned_text(root, &format!("{INSTITUTION}/{field}"));
        let letter = |field: &str| owned_text(root, &format!("{RESPONSE_LETTER}/{field}"));

        let header = ResponseHeader {
            institution_tax_id: institution("npwpLjk"),
            institution_name: institution("namaLjk"),
            response_number: letter("noRespon"),
            response_date: letter("tglRespon"),
            request_number: letter("noSuratPermintaan"),
            response_status: letter("statusRespon"),
            officer_name: letter("namaPj"),
            officer_title: letter("jabatanPj"),
        };

        debug!(response = ?header.response_number, "extracted response header");
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_header_fields() {
        let xml = r#"<respon>
    <lembagaJasaKeuangan>
        <npwpLjk>011234567</npwpLjk>
        <namaLjk>Bank Contoh</namaLjk>
    </lembagaJasaKeuangan>
    <suratJawaban>
        <noRespon>R-01</noRespon>
        <tglRespon>2024-03-01</tglRespon>
        <noSuratPermintaan>S-99</noSuratPermintaan>
        <statusRespon>1</statusRespon>
        <namaPj>Budi</namaPj>
        <jabatanPj>Manager</jabatanPj>
    </suratJawaban>
</respon>"#;
        let root = Element::parse(xml.as_bytes()).unwrap();

        let header = HeaderExtractor.extract(&root).unwrap();
        assert_eq!(header.institution_tax_id.as_deref(), Some("011234567"));
        assert_eq!(header.institution_name.as_deref(), Some("Bank Contoh"));
        assert_eq!(header.response_number.as_deref(), Some("R-01"));
        assert_eq!(header.response_date.as_deref(), Some("2024-03-01"));
        assert_eq!(header.request_number.as_deref(), Some("S-99"));
        assert_eq!(header.response_status.as_deref(), Some("1"));
        assert_eq!(header.officer_name.as_deref(), Some("Budi"));
        assert_eq!(header.officer_title.as_deref(), Some("Manager"));
    }

    #[test]
    fn test_extract_header_from_minimal_document() {
        let root = Element::parse(b"<respon/>").unwrap();
        let header = HeaderExtractor.extract(&root).unwrap();
        assert_eq!(header, ResponseHeader::default());
    }

    #[test]
    fn test_extract_header_finds_nested_sections() {
        let xml = "<a><b><suratJawaban><noRespon>R-7</noRespon><namaPj/></suratJawaban></b></a>";
        let root = Element::parse(xml.as_bytes()).unwrap();

        let header = HeaderExtractor.extract(&root).unwrap();
        assert_eq!(header.response_number.as_deref(), Some("R-7"));
        assert_eq!(header.officer_name.as_deref(), Some(""));
        assert_eq!(header.institution_name, None);
    }
}
