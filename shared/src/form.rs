//! Edit form state for a single client.
//!
//! The form holds raw text as the user typed it and only turns it back into a
//! [`Client`] on a successful submit. Identity fields and currencies are never
//! editable; they are carried through from the client the form was opened on.

use crate::{dates, Client, Transaction};

/// Editable copy of one transaction.
///
/// The date is shown in canonical form when it parses, but it is only
/// validated and written back once the user has touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub value: String,
    pub date: String,
    pub date_error: bool,
    date_edited: bool,
}

impl TransactionDraft {
    fn from_transaction(transaction: &Transaction) -> Self {
        let canonical = dates::to_canonical(&transaction.date);
        Self {
            description: transaction.description.clone(),
            value: transaction.value.clone(),
            date: if canonical.is_empty() {
                transaction.date.clone()
            } else {
                canonical
            },
            date_error: false,
            date_edited: false,
        }
    }

    fn set_date(&mut self, date: String) {
        self.date = date;
        self.date_edited = true;
        self.date_error = false;
    }
}

/// One user edit, as emitted by the form's inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Total(String),
    /// Typed into the balance date text field, kept verbatim
    BalanceDate(String),
    /// Picked from a calendar control, normalized before it is stored
    PickBalanceDate(String),
    TransactionDescription(usize, String),
    TransactionValue(usize, String),
    TransactionDate(usize, String),
    PickTransactionDate(usize, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientForm {
    client: Client,
    pub total: String,
    pub balance_date: String,
    pub balance_date_error: bool,
    pub transactions: Vec<TransactionDraft>,
}

impl ClientForm {
    /// Open the form on `client`, normalizing every date for display
    pub fn new(client: &Client) -> Self {
        Self {
            client: client.clone(),
            total: client.balance.total.clone(),
            balance_date: dates::to_canonical(&client.balance.date),
            balance_date_error: false,
            transactions: client
                .transactions
                .iter()
                .map(TransactionDraft::from_transaction)
                .collect(),
        }
    }

    /// The client the form was opened on, unedited
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn has_errors(&self) -> bool {
        self.balance_date_error || self.transactions.iter().any(|draft| draft.date_error)
    }

    /// Apply an edit. Editing a date clears that field's error flag until the
    /// next submit.
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Total(total) => self.total = total,
            FormEdit::BalanceDate(date) => {
                self.balance_date = date;
                self.balance_date_error = false;
            }
            FormEdit::PickBalanceDate(raw) => {
                self.balance_date = dates::to_canonical(&raw);
                self.balance_date_error = false;
            }
            FormEdit::TransactionDescription(index, description) => {
                if let Some(draft) = self.transactions.get_mut(index) {
                    draft.description = description;
                }
            }
            FormEdit::TransactionValue(index, value) => {
                if let Some(draft) = self.transactions.get_mut(index) {
                    draft.value = value;
                }
            }
            FormEdit::TransactionDate(index, date) => {
                if let Some(draft) = self.transactions.get_mut(index) {
                    draft.set_date(date);
                }
            }
            FormEdit::PickTransactionDate(index, raw) => {
                if let Some(draft) = self.transactions.get_mut(index) {
                    draft.set_date(dates::to_canonical(&raw));
                }
            }
        }
    }

    /// Validate the balance date and every edited transaction date, flag the
    /// bad ones, and build the updated client only when all of them pass.
    /// Untouched transaction dates go back exactly as the backend sent them.
    pub fn submit(&mut self) -> Option<Client> {
        self.balance_date_error = !dates::is_canonical(&self.balance_date);
        for draft in &mut self.transactions {
            draft.date_error = draft.date_edited && !dates::is_canonical(&draft.date);
        }

        if self.has_errors() {
            return None;
        }

        let mut updated = self.client.clone();
        updated.balance.total = self.total.clone();
        updated.balance.date = self.balance_date.clone();
        for (transaction, draft) in updated.transactions.iter_mut().zip(&self.transactions) {
            transaction.description = draft.description.clone();
            transaction.value = draft.value.clone();
            if draft.date_edited {
                transaction.date = draft.date.clone();
            }
        }
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::client;

    #[test]
    fn test_form_shows_client_fields() {
        let john = client("John", "Doe", "1000");
        let form = ClientForm::new(&john);

        assert_eq!(form.total, "1000");
        assert_eq!(form.balance_date, "01.01.2021");
        assert_eq!(form.transactions.len(), 2);
        assert_eq!(form.transactions[1].description, "Rent");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_iso_balance_date_is_normalized_for_display() {
        let mut john = client("John", "Doe", "1000");
        john.balance.date = "2021-01-01".to_string();

        assert_eq!(ClientForm::new(&john).balance_date, "01.01.2021");
    }

    #[test]
    fn test_submit_balance_edit() {
        let john = client("John", "Doe", "1000");
        let mut form = ClientForm::new(&john);

        form.apply(FormEdit::Total("2000".to_string()));
        form.apply(FormEdit::BalanceDate("02.02.2022".to_string()));
        let updated = form.submit().expect("valid form should submit");

        assert_eq!(updated.info, john.info);
        assert_eq!(updated.balance.total, "2000");
        assert_eq!(updated.balance.currency, "USD");
        assert_eq!(updated.balance.date, "02.02.2022");
        assert_eq!(updated.transactions, john.transactions);
    }

    #[test]
    fn test_balance_edit_leaves_backend_transaction_dates_alone() {
        let mut john = client("John", "Doe", "1000");
        john.transactions[0].date = "2021-01-05".to_string();
        john.transactions[1].date = "Jan 5 2021".to_string();
        let mut form = ClientForm::new(&john);

        // Parsable dates display canonically, unparsable ones verbatim
        assert_eq!(form.transactions[0].date, "05.01.2021");
        assert_eq!(form.transactions[1].date, "Jan 5 2021");

        form.apply(FormEdit::Total("2000".to_string()));
        form.apply(FormEdit::BalanceDate("02.02.2022".to_string()));
        let updated = form.submit().expect("untouched transaction dates must not block saving");

        assert_eq!(updated.transactions, john.transactions);
        assert!(form.transactions.iter().all(|draft| !draft.date_error));
    }

    #[test]
    fn test_edited_transaction_date_is_validated_and_written() {
        let mut john = client("John", "Doe", "1000");
        john.transactions[0].date = "2021-01-05".to_string();
        let mut form = ClientForm::new(&john);

        form.apply(FormEdit::TransactionDate(0, "2021-01-06".to_string()));
        assert!(form.submit().is_none());
        assert!(form.transactions[0].date_error);

        form.apply(FormEdit::TransactionDate(0, "06.01.2021".to_string()));
        let updated = form.submit().unwrap();
        assert_eq!(updated.transactions[0].date, "06.01.2021");
        assert_eq!(updated.transactions[1], john.transactions[1]);
    }

    #[test]
    fn test_malformed_balance_date_blocks_submit() {
        let john = client("John", "Doe", "1000");

        for bad in ["01/01/2021", "1.1.2021", ""] {
            let mut form = ClientForm::new(&john);
            form.apply(FormEdit::BalanceDate(bad.to_string()));

            assert_eq!(form.submit(), None, "{bad:?} should be rejected");
            assert!(form.balance_date_error);
        }
    }

    #[test]
    fn test_editing_date_clears_its_flag() {
        let mut form = ClientForm::new(&client("John", "Doe", "1000"));
        form.apply(FormEdit::BalanceDate("nope".to_string()));
        assert!(form.submit().is_none());

        form.apply(FormEdit::BalanceDate("03.03.2023".to_string()));
        assert!(!form.balance_date_error);
        assert_eq!(form.submit().unwrap().balance.date, "03.03.2023");
    }

    #[test]
    fn test_picked_date_is_normalized() {
        let mut form = ClientForm::new(&client("John", "Doe", "1000"));

        form.apply(FormEdit::PickBalanceDate("2022-02-02".to_string()));
        assert_eq!(form.balance_date, "02.02.2022");

        // An unparsable pick empties the field, which then blocks saving
        form.apply(FormEdit::PickBalanceDate("garbage".to_string()));
        assert_eq!(form.balance_date, "");
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_transaction_date_errors_are_per_field() {
        let mut form = ClientForm::new(&client("John", "Doe", "1000"));
        form.apply(FormEdit::TransactionDate(1, "7.1.2021".to_string()));

        assert!(form.submit().is_none());
        assert!(!form.balance_date_error);
        assert!(!form.transactions[0].date_error);
        assert!(form.transactions[1].date_error);
    }

    #[test]
    fn test_transaction_edits_keep_order_type_and_currency() {
        let john = client("John", "Doe", "1000");
        let mut form = ClientForm::new(&john);

        form.apply(FormEdit::TransactionDescription(0, "Bonus".to_string()));
        form.apply(FormEdit::TransactionValue(1, "450".to_string()));
        form.apply(FormEdit::PickTransactionDate(1, "2021-01-08".to_string()));
        let updated = form.submit().unwrap();

        assert_eq!(updated.transactions.len(), 2);
        assert_eq!(updated.transactions[0].description, "Bonus");
        assert_eq!(updated.transactions[0].transaction_type, john.transactions[0].transaction_type);
        assert_eq!(updated.transactions[1].value, "450");
        assert_eq!(updated.transactions[1].date, "08.01.2021");
        assert_eq!(updated.transactions[1].currency, john.transactions[1].currency);
    }

    #[test]
    fn test_out_of_range_transaction_edit_is_ignored() {
        let john = client("John", "Doe", "1000");
        let mut form = ClientForm::new(&john);

        form.apply(FormEdit::TransactionValue(9, "1".to_string()));
        assert_eq!(form.submit().unwrap(), john);
    }
}
