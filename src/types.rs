use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Institution and response metadata ("INFO RESPON").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "npwp")]
    pub institution_tax_id: Option<String>,
    #[serde(rename = "nama")]
    pub institution_name: Option<String>,
    #[serde(rename = "no_respon")]
    pub response_number: Option<String>,
    #[serde(rename = "tgl_respon")]
    pub response_date: Option<String>,
    #[serde(rename = "no_surat_permintaan")]
    pub request_number: Option<String>,
    #[serde(rename = "status_respon")]
    pub response_status: Option<String>,
    #[serde(rename = "nama_pj")]
    pub officer_name: Option<String>,
    #[serde(rename = "jabatan_pj")]
    pub officer_title: Option<String>,
}

/// The subject of the inquiry ("DAFTAR WP").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    #[serde(rename = "npwp")]
    pub tax_id: Option<String>,
    #[serde(rename = "nama_wp")]
    pub name: Option<String>,
    #[serde(rename = "NIK")]
    pub national_id: String,
    #[serde(rename = "status_nasabah")]
    pub customer_status: Option<String>,
    /// Number of account elements in the document, not of transactions.
    #[serde(rename = "jml_data")]
    pub record_count: usize,
}

/// One reported account ("DAFTAR REKENING" row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "no_rekening")]
    pub account_number: String,
    #[serde(rename = "nama_rekening")]
    pub account_name: String,
    #[serde(rename = "tgl_pembukaan_rekening")]
    pub opened_on: String,
    #[serde(rename = "tgl_penutupan_rekening")]
    pub closed_on: String,
    #[serde(rename = "tgl_awal")]
    pub period_start: String,
    #[serde(rename = "tgl_akhir")]
    pub period_end: String,
    #[serde(rename = "mata_uang")]
    pub currency: String,
    pub status: String,
    #[serde(rename = "saldo_awal")]
    pub opening_balance: Decimal,
    #[serde(rename = "saldo_akhir")]
    pub closing_balance: Decimal,
    /// Transactions counted under this account number across every element sharing it.
    #[serde(rename = "jml_transaksi")]
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebitCredit {
    #[serde(rename = "dr")]
    Debit,
    #[serde(rename = "cr")]
    Credit,
}

impl DebitCredit {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dr" => Some(DebitCredit::Debit),
            "cr" => Some(DebitCredit::Credit),
            _ => None,
        }
    }
}

/// One ledger row of a "REK-n" sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "tanggal")]
    pub date: Option<String>,
    #[serde(rename = "no_rekening")]
    pub account_number: Option<String>,
    #[serde(rename = "kd_jenis_transaksi")]
    pub type_code: Option<String>,
    #[serde(rename = "kd_bank_lawan")]
    pub counter_bank: Option<String>,
    #[serde(rename = "no_rekening_lawan")]
    pub counter_account_number: Option<String>,
    #[serde(rename = "nama_rekening_lawan")]
    pub counter_account_name: Option<String>,
    /// Raw flag as found in the document.
    #[serde(rename = "debit_credit")]
    pub flag: Option<String>,
    #[serde(rename = "nilai_transaksi")]
    pub amount: Decimal,
    pub debit: Decimal,
    pub credit: Decimal,
    #[serde(rename = "saldo")]
    pub balance: Decimal,
    #[serde(rename = "berita")]
    pub narrative: Option<String>,
    /// Set when the amount could not be read, or would push the balance out of
    /// range, and the record was zeroed.
    #[serde(skip)]
    pub amount_unparsed: bool,
}

/// Transactions grouped under one account number, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub account_number: Option<String>,
    pub transactions: Vec<TransactionRecord>,
}
