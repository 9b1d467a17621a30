//! State machine behind the client dashboard.
//!
//! The front end feeds every user action and every finished network call in
//! as a [`DashboardAction`]; this module decides what the state becomes. It
//! never talks to the network itself.

use crate::{Client, ClientKey, NetworkError, SummaryClient};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Initial account list arrived (or failed to)
    Loaded(Result<Vec<Client>, NetworkError>),
    ToggleRow(ClientKey),
    BeginEdit(Client),
    CancelEdit,
    SaveStarted,
    /// Upsert finished; on success carries the merged list that was sent
    SaveFinished(Result<Vec<Client>, NetworkError>),
    /// The edited client could not be submitted at all
    SaveRefused(SaveRejected),
    SummaryStarted,
    SummaryFinished(Result<Vec<SummaryClient>, NetworkError>),
    DismissSummary,
    DismissError,
}

/// Why a save could not be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveRejected {
    #[error("a save is already in progress")]
    InFlight,
    #[error("no client named {name} {surname} in the list")]
    UnknownClient { name: String, surname: String },
}

/// What the page should render right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView<'a> {
    Loading,
    /// Initial load failed; nothing else is rendered for the session
    Failed(&'a NetworkError),
    Summary(&'a [SummaryClient]),
    Clients,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Authoritative client list, only replaced by a load or a confirmed save
    pub clients: Vec<Client>,
    /// Client currently open in the edit form
    pub selected: Option<Client>,
    pub expanded: BTreeSet<ClientKey>,
    pub summary: Option<Vec<SummaryClient>>,
    pub loading: bool,
    pub saving: bool,
    pub summarizing: bool,
    pub load_error: Option<NetworkError>,
    /// Last save/summary failure message, shown next to the current view
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            clients: Vec::new(),
            selected: None,
            expanded: BTreeSet::new(),
            summary: None,
            loading: true,
            saving: false,
            summarizing: false,
            load_error: None,
            error: None,
        }
    }
}

/// Replace every entry matching `updated` in place, keeping order.
///
/// Returns `None` when nothing matched.
pub fn merge_client(clients: &[Client], updated: &Client) -> Option<Vec<Client>> {
    let mut matched = false;
    let merged: Vec<Client> = clients
        .iter()
        .map(|client| {
            if client.same_client(updated) {
                matched = true;
                updated.clone()
            } else {
                client.clone()
            }
        })
        .collect();

    matched.then_some(merged)
}

impl DashboardState {
    pub fn view(&self) -> DashboardView<'_> {
        if self.loading {
            DashboardView::Loading
        } else if let Some(error) = &self.load_error {
            DashboardView::Failed(error)
        } else if let Some(summary) = &self.summary {
            DashboardView::Summary(summary)
        } else {
            DashboardView::Clients
        }
    }

    pub fn is_expanded(&self, key: &ClientKey) -> bool {
        self.expanded.contains(key)
    }

    /// Build the list to submit for `updated`, without touching state.
    ///
    /// The local list only changes once the backend accepts it.
    pub fn prepare_save(&self, updated: &Client) -> Result<Vec<Client>, SaveRejected> {
        if self.saving {
            return Err(SaveRejected::InFlight);
        }
        merge_client(&self.clients, updated).ok_or_else(|| SaveRejected::UnknownClient {
            name: updated.info.name.clone(),
            surname: updated.info.surname.clone(),
        })
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Loaded(Ok(clients)) => {
                self.clients = clients;
                self.loading = false;
            }
            DashboardAction::Loaded(Err(error)) => {
                self.clients.clear();
                self.load_error = Some(error);
                self.loading = false;
            }
            DashboardAction::ToggleRow(key) => {
                if !self.expanded.remove(&key) {
                    self.expanded.insert(key);
                }
            }
            DashboardAction::BeginEdit(client) => {
                // The open session belongs to the outstanding save until it settles
                if !self.saving {
                    self.selected = Some(client);
                }
            }
            DashboardAction::CancelEdit => {
                if !self.saving {
                    self.selected = None;
                }
            }
            DashboardAction::SaveStarted => {
                self.saving = true;
                self.error = None;
            }
            DashboardAction::SaveFinished(Ok(clients)) => {
                self.clients = clients;
                self.selected = None;
                self.saving = false;
            }
            DashboardAction::SaveFinished(Err(error)) => {
                self.error = Some(error.to_string());
                self.saving = false;
            }
            DashboardAction::SummaryStarted => {
                self.summarizing = true;
                self.error = None;
            }
            DashboardAction::SummaryFinished(Ok(summary)) => {
                self.summary = Some(summary);
                self.summarizing = false;
            }
            DashboardAction::SummaryFinished(Err(error)) => {
                self.error = Some(error.to_string());
                self.summarizing = false;
            }
            DashboardAction::SaveRefused(reason) => {
                self.error = Some(format!("Cannot save: {}", reason));
            }
            DashboardAction::DismissSummary => self.summary = None,
            DashboardAction::DismissError => self.error = None,
        }
    }
}
