use yew::prelude::*;
use shared::DashboardView;

mod components;
mod hooks;
mod services;

use components::{ClientEditForm, ClientList, ErrorBanner, Header, SummaryTable};
use hooks::use_dashboard::use_dashboard;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let dashboard = use_dashboard(&api_client);
    let state = &dashboard.state;
    let actions = &dashboard.actions;

    let body = match state.view() {
        DashboardView::Loading => {
            return html! { <div class="loading">{"Loading..."}</div> };
        }
        // A failed initial load replaces the whole page; only a reload recovers
        DashboardView::Failed(error) => {
            return html! { <div class="load-error">{error.to_string()}</div> };
        }
        DashboardView::Summary(summary) => html! {
            <SummaryTable
                summary={summary.to_vec()}
                on_back={actions.dismiss_summary.clone()}
            />
        },
        DashboardView::Clients => html! {
            <div class="dashboard-grid">
                <ClientList
                    clients={state.clients.clone()}
                    expanded={state.expanded.clone()}
                    selected={state.selected.as_ref().map(|client| client.key())}
                    on_toggle_transactions={actions.toggle_row.clone()}
                    on_edit={actions.begin_edit.clone()}
                />
                {if let Some(selected) = &state.selected {
                    html! {
                        <ClientEditForm
                            client={selected.clone()}
                            saving={state.saving}
                            on_save={actions.save.clone()}
                            on_cancel={actions.cancel_edit.clone()}
                        />
                    }
                } else { html! {} }}
            </div>
        },
    };

    html! {
        <>
            <Header
                summary_mode={state.summary.is_some()}
                summarizing={state.summarizing}
                on_summary={actions.request_summary.clone()}
            />
            <main class="main">
                <div class="container">
                    {if let Some(error) = &state.error {
                        html! {
                            <ErrorBanner
                                message={error.clone()}
                                on_dismiss={actions.dismiss_error.clone()}
                            />
                        }
                    } else { html! {} }}
                    {body}
                </div>
            </main>
        </>
    }
}

fn main() {
    Logger::info_with_component("app", "Starting bank client dashboard");
    yew::Renderer::<App>::new().render();
}
