use yew::prelude::*;
use shared::SummaryClient;

#[derive(Properties, PartialEq)]
pub struct SummaryTableProps {
    pub summary: Vec<SummaryClient>,
    pub on_back: Callback<()>,
}

/// Backend-computed totals, one row per client in the order the backend sent them
#[function_component(SummaryTable)]
pub fn summary_table(props: &SummaryTableProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <section class="summary-section">
            <h2>{"Summary Report"}</h2>
            <div class="table-container">
                <table class="summary-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Balance"}</th>
                            <th>{"Total Expenses"}</th>
                            <th>{"Total Revenues"}</th>
                            <th>{"Total Turnover"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.summary.iter().map(|row| {
                            let currency = &row.summary.currency;
                            html! {
                                <tr>
                                    <td>{row.info.full_name()}</td>
                                    <td>{format!("{} {}", row.balance.total, row.balance.currency)}</td>
                                    <td>{format!("{} {}", row.summary.total_expenses, currency)}</td>
                                    <td>{format!("{} {}", row.summary.total_revenues, currency)}</td>
                                    <td>{format!("{} {}", row.summary.total_turnover, currency)}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
            <div class="summary-actions">
                <button class="btn btn-primary" onclick={on_back}>{"Back to Clients"}</button>
            </div>
        </section>
    }
}
