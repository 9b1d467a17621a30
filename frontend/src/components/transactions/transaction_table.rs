use yew::prelude::*;
use shared::Transaction;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    if props.transactions.is_empty() {
        return html! { <div class="transactions-empty">{"No transactions"}</div> };
    }

    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Description"}</th>
                        <th>{"Date"}</th>
                        <th>{"Value"}</th>
                        <th>{"Currency"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.transactions.iter().map(|transaction| {
                        html! {
                            <tr>
                                <td class={transaction.transaction_type.css_class()}>
                                    {transaction.transaction_type.label()}
                                </td>
                                <td class="description">{&transaction.description}</td>
                                <td class="date">{&transaction.date}</td>
                                <td class="amount">{transaction.formatted_value()}</td>
                                <td class="currency">{&transaction.currency}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
