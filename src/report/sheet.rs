use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::types::{AccountRecord, ResponseHeader, SubjectSummary, TransactionRecord};

pub const INFO_SHEET: &str = "INFO RESPON";
pub const SUBJECT_SHEET: &str = "DAFTAR WP";
pub const ROSTER_SHEET: &str = "DAFTAR REKENING";
pub const LEDGER_SHEET_PREFIX: &str = "REK-";

/// Name of the ledger sheet for the nth distinct account (1-based).
pub fn ledger_sheet_name(sequence: usize) -> String {
    format!("{LEDGER_SHEET_PREFIX}{sequence}")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

impl<'a> From<&'a Option<String>> for Cell<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(Cell::Blank, Cell::Text)
    }
}

impl<'a> From<&'a String> for Cell<'a> {
    fn from(value: &'a String) -> Self {
        Cell::Text(value)
    }
}

impl From<Decimal> for Cell<'_> {
    fn from(value: Decimal) -> Self {
        value.to_f64().map_or(Cell::Blank, Cell::Number)
    }
}

impl From<usize> for Cell<'_> {
    fn from(value: usize) -> Self {
        value.to_f64().map_or(Cell::Blank, Cell::Number)
    }
}

/// A record that can be laid out as one worksheet row under fixed column headers.
pub trait SheetRow {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell<'_>>;
}

impl SheetRow for ResponseHeader {
    const COLUMNS: &'static [&'static str] = &[
        "npwp",
        "nama",
        "no_respon",
        "tgl_respon",
        "no_surat_permintaan",
        "status_respon",
        "nama_pj",
        "jabatan_pj",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            (&self.institution_tax_id).into(),
            (&self.institution_name).into(),
            (&self.response_number).into(),
            (&self.response_date).into(),
            (&self.request_number).into(),
            (&self.response_status).into(),
            (&self.officer_name).into(),
            (&self.officer_title).into(),
        ]
    }
}

impl SheetRow for SubjectSummary {
    const COLUMNS: &'static [&'static str] =
        &["npwp", "nama_wp", "NIK", "status_nasabah", "jml_data"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            (&self.tax_id).into(),
            (&self.name).into(),
            (&self.national_id).into(),
            (&self.customer_status).into(),
            self.record_count.into(),
        ]
    }
}

impl SheetRow for AccountRecord {
    const COLUMNS: &'static [&'static str] = &[
        "no_rekening",
        "nama_rekening",
        "tgl_pembukaan_rekening",
        "tgl_penutupan_rekening",
        "tgl_awal",
        "tgl_akhir",
        "mata_uang",
        "status",
        "saldo_awal",
        "saldo_akhir",
        "jml_transaksi",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            (&self.account_number).into(),
            (&self.account_name).into(),
            (&self.opened_on).into(),
            (&self.closed_on).into(),
            (&self.period_start).into(),
            (&self.period_end).into(),
            (&self.currency).into(),
            (&self.status).into(),
            self.opening_balance.into(),
            self.closing_balance.into(),
            self.transaction_count.into(),
        ]
    }
}

impl SheetRow for TransactionRecord {
    const COLUMNS: &'static [&'static str] = &[
        "tanggal",
        "no_rekening",
        "kd_jenis_transaksi",
        "kd_bank_lawan",
        "no_rekening_lawan",
        "nama_rekening_lawan",
        "debit_credit",
        "nilai_transaksi",
        "debit",
        "credit",
        "saldo",
        "berita",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            (&self.date).into(),
            (&self.account_number).into(),
            (&self.type_code).into(),
            (&self.counter_bank).into(),
            (&self.counter_account_number).into(),
            (&self.counter_account_name).into(),
            (&self.flag).into(),
            self.amount.into(),
            self.debit.into(),
            self.credit.into(),
            self.balance.into(),
            (&self.narrative).into(),
        ]
    }
}
