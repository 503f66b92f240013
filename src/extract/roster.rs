use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::{ACCOUNTS_PATH, Extractor, NumberError, TRANSACTIONS_PATH, parse_decimal};
use crate::document::Element;
use crate::errors::{ConvertError, ConvertResult};
use crate::types::AccountRecord;

const ACCOUNT_NUMBER: &str = "infoRekening/noRekening";
const OPENING_BALANCE: &str = "infoRekening/saldoAwal";
const CLOSING_BALANCE: &str = "infoRekening/saldoAkhir";

/// Account rows plus the opening balances that seed the ledger pass.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub accounts: Vec<AccountRecord>,
    /// Keyed by account number; a later element with the same number wins.
    pub opening_balances: HashMap<String, Decimal>,
}

/// Builds the account roster in two passes: transaction counts per account
/// number first, then one row per account element carrying that count.
pub struct RosterBuilder;

impl RosterBuilder {
    fn count_transactions<'a>(elements: &[&'a Element]) -> HashMap<&'a str, usize> {
        let mut counts = HashMap::new();
        for &element in elements {
            let number = element.find_text_or(ACCOUNT_NUMBER, "");
            *counts.entry(number).or_insert(0) += element.find_all(TRANSACTIONS_PATH).len();
        }
        counts
    }

    fn account_record(element: &Element, transaction_count: usize) -> ConvertResult<AccountRecord> {
        let field = |path: &str| element.find_text_or(path, "").to_string();
        let account_number = field(ACCOUNT_NUMBER);

        Ok(AccountRecord {
            opening_balance: balance(element, &account_number, OPENING_BALANCE, "saldoAwal")?,
            closing_balance: balance(element, &account_number, CLOSING_BALANCE, "saldoAkhir")?,
            account_name: field("infoRekening/namaRekening"),
            opened_on: field("infoRekening/tglBukaRek"),
            closed_on: field("infoRekening/tglTutupRek"),
            period_start: field("infoRekening/tglAwal"),
            period_end: field("infoRekening/tglAkhir"),
            currency: field("infoRekening/mataUang"),
            status: field("infoRekening/statusRekening"),
            transaction_count,
            account_number,
        })
    }
}

impl Extractor for RosterBuilder {
    type Output = Roster;

    fn extract(self, root: &Element) -> ConvertResult<Self::Output> {
        let elements = root.find_all(ACCOUNTS_PATH);
        let counts = Self::count_transactions(&elements);

        let mut roster = Roster::default();
        for element in &elements {
            let number = element.find_text_or(ACCOUNT_NUMBER, "");
            let count = counts.get(number).copied().unwrap_or_default();
            let record = Self::account_record(element, count)?;

            roster
                .opening_balances
                .insert(record.account_number.clone(), record.opening_balance);
            roster.accounts.push(record);
        }

        debug!(
            accounts = roster.accounts.len(),
            distinct = counts.len(),
            "built account roster"
        );
        Ok(roster)
    }
}

fn balance(
    element: &Element,
    account: &str,
    path: &str,
    field: &'static str,
) -> ConvertResult<Decimal> {
    let text = element.find_text(path);
    match text.map(parse_decimal) {
        Some(Ok(value)) => Ok(value),
        Some(Err(NumberError::OutOfRange)) => Err(ConvertError::BalanceOutOfRange {
            account: account.to_string(),
            field,
            value: text.unwrap_or_default().to_string(),
        }),
        _ => Err(ConvertError::InvalidBalance {
            account: account.to_string(),
            field,
            value: text.map(str::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn account(number: &str, opening: &str, closing: &str, transactions: usize) -> String {
        format!(
            "<dataRekening><infoRekening>\
             <noRekening>{number}</noRekening><namaRekening>Giro {number}</namaRekening>\
             <tglBukaRek>2020-01-01</tglBukaRek><tglAwal>2024-01-01</tglAwal>\
             <tglAkhir>2024-01-31</tglAkhir><mataUang>IDR</mataUang>\
             <statusRekening>aktif</statusRekening>{opening}{closing}\
             </infoRekening>{}</dataRekening>",
            "<mutasiRekening/>".repeat(transactions)
        )
    }

    fn balances(opening: &str, closing: &str) -> (String, String) {
        (
            format!("<saldoAwal>{opening}</saldoAwal>"),
            format!("<saldoAkhir>{closing}</saldoAkhir>"),
        )
    }

    fn document(accounts: &[String]) -> Element {
        let xml = format!(
            "<root><responPermintaan><responData><dataKeuangan>{}</dataKeuangan>\
             </responData></responPermintaan></root>",
            accounts.concat()
        );
        Element::parse(xml.as_bytes()).unwrap()
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_roster_rows_in_document_order() {
        let (o1, c1) = balances("1000", "850");
        let (o2, c2) = balances("5.5", "5.5");
        let root = document(&[account("A1", &o1, &c1, 2), account("B2", &o2, &c2, 0)]);

        let roster = RosterBuilder.extract(&root).unwrap();
        assert_eq!(roster.accounts.len(), 2);

        let first = &roster.accounts[0];
        assert_eq!(first.account_number, "A1");
        assert_eq!(first.account_name, "Giro A1");
        assert_eq!(first.opened_on, "2020-01-01");
        assert_eq!(first.closed_on, "");
        assert_eq!(first.period_start, "2024-01-01");
        assert_eq!(first.period_end, "2024-01-31");
        assert_eq!(first.currency, "IDR");
        assert_eq!(first.status, "aktif");
        assert_eq!(first.opening_balance, dec("1000"));
        assert_eq!(first.closing_balance, dec("850"));
        assert_eq!(first.transaction_count, 2);

        assert_eq!(roster.accounts[1].account_number, "B2");
        assert_eq!(roster.accounts[1].transaction_count, 0);
        assert_eq!(roster.opening_balances["B2"], dec("5.5"));
    }

    #[test]
    fn test_shared_account_number_accumulates_counts() {
        let (o1, c1) = balances("100", "100");
        let (o2, c2) = balances("300", "300");
        let root = document(&[account("A1", &o1, &c1, 2), account("A1", &o2, &c2, 3)]);

        let roster = RosterBuilder.extract(&root).unwrap();
        assert_eq!(roster.accounts[0].transaction_count, 5);
        assert_eq!(roster.accounts[1].transaction_count, 5);
        assert_eq!(roster.opening_balances.len(), 1);
        assert_eq!(roster.opening_balances["A1"], dec("300"));
    }

    #[test]
    fn test_empty_document_has_no_accounts() {
        let roster = RosterBuilder.extract(&document(&[])).unwrap();
        assert!(roster.accounts.is_empty());
        assert!(roster.opening_balances.is_empty());
    }

    #[rstest]
    #[case::opening_not_numeric(
        "<saldoAwal>seribu</saldoAwal>",
        "<saldoAkhir>1</saldoAkhir>",
        "saldoAwal"
    )]
    #[case::opening_missing("", "<saldoAkhir>1</saldoAkhir>", "saldoAwal")]
    #[case::opening_empty("<saldoAwal/>", "<saldoAkhir>1</saldoAkhir>", "saldoAwal")]
    #[case::closing_not_numeric(
        "<saldoAwal>1</saldoAwal>",
        "<saldoAkhir>n/a</saldoAkhir>",
        "saldoAkhir"
    )]
    #[case::closing_missing("<saldoAwal>1</saldoAwal>", "", "saldoAkhir")]
    fn test_bad_balance_is_fatal(
        #[case] opening: &str,
        #[case] closing: &str,
        #[case] expected_field: &str,
    ) {
        let (o, c) = balances("1", "1");
        let root = document(&[account("OK", &o, &c, 1), account("BAD", opening, closing, 1)]);

        let result = RosterBuilder.extract(&root);
        match result {
            Err(ConvertError::InvalidBalance { account, field, .. }) => {
                assert_eq!(account, "BAD");
                assert_eq!(field, expected_field);
            }
            other => panic!("expected InvalidBalance, got {:?}", other),
        }
    }

    #[rstest]
    #[case::opening(
        "<saldoAwal>1e30</saldoAwal>",
        "<saldoAkhir>1</saldoAkhir>",
        "saldoAwal",
        "1e30"
    )]
    #[case::closing(
        "<saldoAwal>1</saldoAwal>",
        "<saldoAkhir>-1e29</saldoAkhir>",
        "saldoAkhir",
        "-1e29"
    )]
    fn test_out_of_range_balance_is_reported_apart(
        #[case] opening: &str,
        #[case] closing: &str,
        #[case] expected_field: &str,
        #[case] expected_value: &str,
    ) {
        let root = document(&[account("BIG", opening, closing, 0)]);

        match RosterBuilder.extract(&root) {
            Err(error @ ConvertError::BalanceOutOfRange { .. }) => {
                let message = error.to_string();
                assert!(message.contains("out of range"), "{message}");
                assert!(message.contains(expected_field), "{message}");
                assert!(message.contains(expected_value), "{message}");
            }
            other => panic!("expected BalanceOutOfRange, got {:?}", other),
        }
    }
}
