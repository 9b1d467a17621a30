use serde::{Deserialize, Serialize};
use std::fmt;

pub mod dashboard;
pub mod dates;
pub mod error;
pub mod form;

pub use dashboard::{DashboardAction, DashboardState, DashboardView, SaveRejected};
pub use error::NetworkError;
pub use form::{ClientForm, FormEdit, TransactionDraft};

/// Identity block of a bank client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Backend-assigned identifier, only present on some payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ClientInfo {
    /// "Name Surname" as shown in the summary table
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Country for display, "N/A" when the backend sent none
    pub fn country_or_na(&self) -> &str {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => country,
            _ => "N/A",
        }
    }
}

/// Balance snapshot of a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Decimal amount kept as the backend sent it
    pub total: String,
    /// Currency code, e.g. "USD"
    pub currency: String,
    /// Snapshot date, canonical form is dd.mm.yyyy
    pub date: String,
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into the account
    Income,
    /// Money leaving the account
    Outcome,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Outcome => "Outcome",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionType::Income => "transaction-type income",
            TransactionType::Outcome => "transaction-type outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single entry of a client's transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    /// Display date, canonical form is dd.mm.yyyy
    pub date: String,
    /// Decimal amount kept as the backend sent it
    pub value: String,
    pub currency: String,
}

impl Transaction {
    /// Value with two decimals when it parses as a number, verbatim otherwise
    pub fn formatted_value(&self) -> String {
        match self.value.trim().parse::<f64>() {
            Ok(value) => format!("{:.2}", value),
            Err(_) => self.value.clone(),
        }
    }
}

/// A bank client with its balance and transaction history.
///
/// Transactions keep the order the backend returned them in; nothing in the
/// front end re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub info: ClientInfo,
    pub balance: Balance,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Stable key used to track per-client UI state such as expanded rows
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientKey {
    Id(u64),
    Name {
        name: String,
        surname: String,
        country: Option<String>,
    },
}

impl Client {
    pub fn key(&self) -> ClientKey {
        match self.info.client_id {
            Some(id) => ClientKey::Id(id),
            None => ClientKey::Name {
                name: self.info.name.clone(),
                surname: self.info.surname.clone(),
                country: self.info.country.clone(),
            },
        }
    }

    /// Whether `other` is the same client for the purpose of merging an edit.
    ///
    /// Identifiers win when both records carry one; otherwise the
    /// (name, surname) pair is the key.
    pub fn same_client(&self, other: &Client) -> bool {
        match (self.info.client_id, other.info.client_id) {
            (Some(a), Some(b)) => a == b,
            _ => self.info.name == other.info.name && self.info.surname == other.info.surname,
        }
    }
}

/// Per-client aggregates computed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_expenses: String,
    pub total_revenues: String,
    pub total_turnover: String,
    pub currency: String,
}

/// Read-only summary row returned by the summary endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryClient {
    pub info: ClientInfo,
    pub balance: Balance,
    pub summary: Summary,
}

/// Wire envelope pairing a client with a restated balance and transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub client: Client,
    pub balance: Balance,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl From<Client> for Account {
    fn from(client: Client) -> Self {
        Self {
            balance: client.balance.clone(),
            transactions: client.transactions.clone(),
            client,
        }
    }
}

/// Response of `GET /bankingtransactions/accounts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsResponse {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl AccountsResponse {
    /// Unwrap every envelope to its embedded client, keeping order
    pub fn into_clients(self) -> Vec<Client> {
        self.accounts.into_iter().map(|account| account.client).collect()
    }
}

/// Body of `POST /bankingtransactions/create-or-update-accounts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertAccountsRequest {
    pub accounts: Vec<Account>,
}

impl UpsertAccountsRequest {
    pub fn from_clients(clients: &[Client]) -> Self {
        Self {
            accounts: clients.iter().cloned().map(Account::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryClients {
    pub client: Vec<Client>,
}

/// Body of `POST /bankingtransactions/summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub clients: SummaryClients,
}

impl SummaryRequest {
    pub fn from_clients(clients: &[Client]) -> Self {
        Self {
            clients: SummaryClients {
                client: clients.to_vec(),
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::client;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_wire_names() {
        let value = serde_json::to_value(client("John", "Doe", "1000")).unwrap();

        assert_eq!(value["info"]["name"], "John");
        assert_eq!(value["info"]["country"], "USA");
        // No identifier means no clientId key at all
        assert!(value["info"].get("clientId").is_none());
        assert_eq!(value["balance"]["total"], "1000");
        assert_eq!(value["transactions"][0]["type"], "income");
        assert_eq!(value["transactions"][1]["type"], "outcome");
        assert_eq!(value["transactions"][1]["value"], "500.5");
    }

    #[test]
    fn test_parse_accounts_response() {
        let body = json!({
            "accounts": [{
                "client": {
                    "info": { "clientId": 7, "name": "Jane", "surname": "Roe" },
                    "balance": { "total": "10", "currency": "EUR", "date": "2021-01-01" },
                    "transactions": []
                },
                "balance": { "total": "10", "currency": "EUR", "date": "2021-01-01" },
                "transactions": []
            }]
        });

        let clients = serde_json::from_value::<AccountsResponse>(body).unwrap().into_clients();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].info.client_id, Some(7));
        assert_eq!(clients[0].info.country, None);
        assert_eq!(clients[0].info.country_or_na(), "N/A");
        assert_eq!(clients[0].balance.currency, "EUR");
    }

    #[test]
    fn test_upsert_payload_round_trips_through_accounts_response() {
        let original = vec![client("John", "Doe", "1000"), client("Jane", "Roe", "20")];

        let payload = serde_json::to_string(&UpsertAccountsRequest::from_clients(&original)).unwrap();
        let parsed: AccountsResponse = serde_json::from_str(&payload).unwrap();

        // Transaction order must survive the trip
        assert_eq!(parsed.into_clients(), original);
    }

    #[test]
    fn test_account_envelope_restates_balance_and_transactions() {
        let client = client("John", "Doe", "1000");
        let account = Account::from(client.clone());

        assert_eq!(account.balance, client.balance);
        assert_eq!(account.transactions, client.transactions);
        assert_eq!(account.client, client);
    }

    #[test]
    fn test_summary_request_shape() {
        let request = SummaryRequest::from_clients(&[client("John", "Doe", "1000")]);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["clients"]["client"][0]["info"]["surname"], "Doe");
    }

    #[test]
    fn test_parse_summary_client() {
        let body = json!([{
            "info": { "name": "John", "surname": "Doe", "country": "USA" },
            "balance": { "total": "1000", "currency": "USD", "date": "01.01.2021" },
            "summary": {
                "totalExpenses": "500.5",
                "totalRevenues": "1500",
                "totalTurnover": "2000.5",
                "currency": "USD"
            }
        }]);

        let summary: Vec<SummaryClient> = serde_json::from_value(body).unwrap();
        assert_eq!(summary[0].summary.total_turnover, "2000.5");
        assert_eq!(summary[0].info.full_name(), "John Doe");
    }

    #[test]
    fn test_same_client() {
        let john = client("John", "Doe", "1000");
        let mut updated = john.clone();
        updated.balance.total = "2000".to_string();
        assert!(john.same_client(&updated));

        // Country does not take part in the name match
        updated.info.country = None;
        assert!(john.same_client(&updated));

        assert!(!john.same_client(&client("John", "Smith", "1000")));

        // Identifiers win over names when both sides have one
        let mut first = client("John", "Doe", "1");
        let mut second = client("John", "Doe", "1");
        first.info.client_id = Some(1);
        second.info.client_id = Some(2);
        assert!(!first.same_client(&second));
    }

    #[test]
    fn test_client_key() {
        let mut john = client("John", "Doe", "1000");
        assert_eq!(
            john.key(),
            ClientKey::Name {
                name: "John".to_string(),
                surname: "Doe".to_string(),
                country: Some("USA".to_string()),
            }
        );

        john.info.client_id = Some(42);
        assert_eq!(john.key(), ClientKey::Id(42));
    }

    #[test]
    fn test_formatted_value() {
        let mut transaction = fixtures::transaction(TransactionType::Income, "Gift", "01.01.2021", "12.5");
        assert_eq!(transaction.formatted_value(), "12.50");

        transaction.value = "n/a".to_string();
        assert_eq!(transaction.formatted_value(), "n/a");
    }

    #[test]
    fn test_transaction_type_labels() {
        assert_eq!(TransactionType::Income.to_string(), "Income");
        assert_eq!(TransactionType::Outcome.label(), "Outcome");
    }
}
