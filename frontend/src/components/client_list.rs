use std::collections::BTreeSet;

use yew::prelude::*;
use shared::{Client, ClientKey};
use super::transactions::TransactionTable;

#[derive(Properties, PartialEq)]
pub struct ClientListProps {
    pub clients: Vec<Client>,
    pub expanded: BTreeSet<ClientKey>,
    /// Key of the client open in the edit form, if any
    #[prop_or_default]
    pub selected: Option<ClientKey>,
    pub on_toggle_transactions: Callback<ClientKey>,
    pub on_edit: Callback<Client>,
}

#[function_component(ClientList)]
pub fn client_list(props: &ClientListProps) -> Html {
    html! {
        <section class="clients-section">
            <div class="table-container">
                <table class="clients-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Surname"}</th>
                            <th>{"Country"}</th>
                            <th>{"Balance"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.clients.iter().map(|client| {
                            let key = client.key();
                            let expanded = props.expanded.contains(&key);
                            let is_selected = props.selected.as_ref() == Some(&key);

                            let on_toggle = {
                                let on_toggle_transactions = props.on_toggle_transactions.clone();
                                let key = key.clone();
                                Callback::from(move |_: MouseEvent| on_toggle_transactions.emit(key.clone()))
                            };
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                let client = client.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(client.clone()))
                            };

                            html! {
                                <>
                                    <tr class={classes!("client-row", is_selected.then_some("selected"))}>
                                        <td>{&client.info.name}</td>
                                        <td>{&client.info.surname}</td>
                                        <td>{client.info.country_or_na()}</td>
                                        <td class="balance">
                                            {format!("{} {}", client.balance.total, client.balance.currency)}
                                        </td>
                                        <td class="actions">
                                            <button class="btn btn-secondary" onclick={on_toggle}>
                                                {if expanded { "Hide Transactions" } else { "Show Transactions" }}
                                            </button>
                                            <button class="btn btn-primary" onclick={on_edit}>
                                                {"Edit"}
                                            </button>
                                        </td>
                                    </tr>
                                    {if expanded {
                                        html! {
                                            <tr class="transactions-row">
                                                <td colspan="5">
                                                    <TransactionTable transactions={client.transactions.clone()} />
                                                </td>
                                            </tr>
                                        }
                                    } else { html! {} }}
                                </>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
