use std::ops::Deref;
use std::rc::Rc;

use shared::{
    Client, ClientKey, DashboardAction, DashboardState, SaveRejected, UpsertAccountsRequest,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Yew reducer wrapper around the shared dashboard state machine
#[derive(Clone, Default, PartialEq)]
pub struct DashboardStore(DashboardState);

impl Deref for DashboardStore {
    type Target = DashboardState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    pub toggle_row: Callback<ClientKey>,
    pub begin_edit: Callback<Client>,
    pub cancel_edit: Callback<()>,
    pub save: Callback<Client>,
    pub request_summary: Callback<()>,
    pub dismiss_summary: Callback<()>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let dashboard = use_reducer(DashboardStore::default);

    // Load the account list once on mount
    use_effect_with((), {
        let api_client = api_client.clone();
        let dispatcher = dashboard.dispatcher();

        move |_| {
            spawn_local(async move {
                let result = api_client.list_accounts().await;
                if let Err(e) = &result {
                    Logger::error_with_component("dashboard", &format!("Initial load failed: {}", e));
                }
                dispatcher.dispatch(DashboardAction::Loaded(result));
            });

            || ()
        }
    });

    let toggle_row = {
        let dispatcher = dashboard.dispatcher();
        use_callback((), move |key: ClientKey, _| {
            dispatcher.dispatch(DashboardAction::ToggleRow(key));
        })
    };

    let begin_edit = {
        let dispatcher = dashboard.dispatcher();
        use_callback((), move |client: Client, _| {
            Logger::debug_with_component(
                "dashboard",
                &format!("Editing {}", client.info.full_name()),
            );
            dispatcher.dispatch(DashboardAction::BeginEdit(client));
        })
    };

    let cancel_edit = {
        let dispatcher = dashboard.dispatcher();
        use_callback((), move |_, _| {
            dispatcher.dispatch(DashboardAction::CancelEdit);
        })
    };

    // Merge the edited client into the current list and submit all of it.
    // The local list is only replaced once the backend accepts the batch.
    let save = {
        let api_client = api_client.clone();
        let dashboard = dashboard.clone();

        Callback::from(move |updated: Client| {
            let merged = match dashboard.prepare_save(&updated) {
                Ok(merged) => merged,
                Err(reason) => {
                    Logger::warn_with_component("dashboard", &format!("Save refused: {}", reason));
                    // A double click while saving needs no banner
                    if !matches!(reason, SaveRejected::InFlight) {
                        dashboard.dispatch(DashboardAction::SaveRefused(reason));
                    }
                    return;
                }
            };

            dashboard.dispatch(DashboardAction::SaveStarted);

            let api_client = api_client.clone();
            let dispatcher = dashboard.dispatcher();
            spawn_local(async move {
                let request = UpsertAccountsRequest::from_clients(&merged);
                let result = match api_client.upsert_accounts(&request).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "dashboard",
                            &format!("Saved {}", updated.info.full_name()),
                        );
                        Ok(merged)
                    }
                    Err(e) => {
                        Logger::error_with_component("dashboard", &format!("Save failed: {}", e));
                        Err(e)
                    }
                };
                dispatcher.dispatch(DashboardAction::SaveFinished(result));
            });
        })
    };

    let request_summary = {
        let api_client = api_client.clone();
        let dashboard = dashboard.clone();

        Callback::from(move |_| {
            if dashboard.summarizing {
                return;
            }
            dashboard.dispatch(DashboardAction::SummaryStarted);

            let clients = dashboard.clients.clone();
            let api_client = api_client.clone();
            let dispatcher = dashboard.dispatcher();
            spawn_local(async move {
                let result = api_client.compute_summary(&clients).await;
                if let Err(e) = &result {
                    Logger::error_with_component("dashboard", &format!("Summary failed: {}", e));
                }
                dispatcher.dispatch(DashboardAction::SummaryFinished(result));
            });
        })
    };

    let dismiss_summary = {
        let dispatcher = dashboard.dispatcher();
        use_callback((), move |_, _| {
            dispatcher.dispatch(DashboardAction::DismissSummary);
        })
    };

    let dismiss_error = {
        let dispatcher = dashboard.dispatcher();
        use_callback((), move |_, _| {
            dispatcher.dispatch(DashboardAction::DismissError);
        })
    };

    let state = (**dashboard).clone();

    let actions = UseDashboardActions {
        toggle_row,
        begin_edit,
        cancel_edit,
        save,
        request_summary,
        dismiss_summary,
        dismiss_error,
    };

    UseDashboardResult { state, actions }
}
