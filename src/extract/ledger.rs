use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{ACCOUNTS_PATH, Extractor, NumberError, TRANSACTIONS_PATH, owned_text, parse_decimal};
use crate::document::Element;
use crate::errors::{ConvertError, ConvertResult};
use crate::types::{DebitCredit, Ledger, TransactionRecord};

/// Grouping key of an account element. Read from the first transaction, not
/// from `infoRekening`, so an account without transactions groups under `None`.
const LEDGER_ACCOUNT_NUMBER: &str = "mutasiRekening/noRekening";

/// Walks every account's transactions in document order and recomputes the
/// running balance, starting from the opening balances seeded by the roster.
pub struct LedgerBuilder {
    balances: HashMap<String, Decimal>,
}

impl LedgerBuilder {
    pub fn new(opening_balances: HashMap<String, Decimal>) -> Self {
        Self {
            balances: opening_balances,
        }
    }

    fn post(
        &mut self,
        account: Option<&str>,
        transaction: &Element,
    ) -> ConvertResult<TransactionRecord> {
        let number = account.unwrap_or_default();
        let current = match account {
            Some(number) => self.balances.get_mut(number),
            None => None,
        }
        .ok_or_else(|| ConvertError::UnknownLedgerAccount(number.to_string()))?;

        let flag = owned_text(transaction, "kodeDebitCredit");
        let direction = flag.as_deref().and_then(DebitCredit::from_code);
        let amount_text = transaction.find_text_or("nilaiTransaksi", "0");

        let posted = parse_decimal(amount_text)
            .map_err(|error| match error {
                NumberError::Malformed => "unreadable amount",
                NumberError::OutOfRange => "amount out of range",
            })
            .and_then(|amount| {
                let (debit, credit) = match direction {
                    Some(DebitCredit::Debit) => (amount, Decimal::ZERO),
                    Some(DebitCredit::Credit) => (Decimal::ZERO, amount),
                    None => (Decimal::ZERO, Decimal::ZERO),
                };
                current
                    .checked_sub(debit)
                    .and_then(|balance| balance.checked_add(credit))
                    .map(|balance| (amount, debit, credit, balance))
                    .ok_or("running balance out of range")
            });

        let (amount, debit, credit, amount_unparsed) = match posted {
            Ok((amount, debit, credit, balance)) => {
                *current = balance;
                (amount, debit, credit, false)
            }
            Err(reason) => {
                warn!(
                    account = number,
                    amount = amount_text,
                    reason,
                    "transaction amount not applied, carrying balance forward"
                );
                (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, true)
            }
        };

        Ok(TransactionRecord {
            date: owned_text(transaction, "tglTransaksi"),
            account_number: account.map(str::to_string),
            type_code: owned_text(transaction, "kdJnsTrans"),
            counter_bank: owned_text(transaction, "kdBankLawan"),
            counter_account_number: owned_text(transaction, "noRekeningLawan"),
            counter_account_name: owned_text(transaction, "namaRekeningLawan"),
            flag,
            amount,
            debit,
            credit,
            balance: *current,
            narrative: owned_text(transaction, "berita"),
            amount_unparsed,
        })
    }
}

impl Extractor for LedgerBuilder {
    type Output = Vec<Ledger>;

    fn extract(mut self, root: &Element) -> ConvertResult<Self::Output> {
        let mut ledgers: Vec<Ledger> = Vec::new();
        let mut positions: HashMap<Option<String>, usize> = HashMap::new();

        for element in root.find_all(ACCOUNTS_PATH) {
            let account = owned_text(element, LEDGER_ACCOUNT_NUMBER);
            let position = *positions.entry(account.clone()).or_insert_with(|| {
                ledgers.push(Ledger {
                    account_number: account.clone(),
                    transactions: Vec::new(),
                });
                ledgers.len() - 1
            });

            for transaction in element.find_all(TRANSACTIONS_PATH) {
                let record = self.post(account.as_deref(), transaction)?;
                ledgers[position].transactions.push(record);
            }
        }

        debug!(ledgers = ledgers.len(), "built transaction ledgers");
        Ok(ledgers)
    }
}
