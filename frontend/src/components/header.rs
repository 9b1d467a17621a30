use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Hide the summary button while the summary is on screen
    pub summary_mode: bool,
    pub summarizing: bool,
    pub on_summary: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_summary = {
        let on_summary = props.on_summary.clone();
        Callback::from(move |_: MouseEvent| on_summary.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Financial Transactions Tracker"}</h1>
                {if props.summary_mode {
                    html! {}
                } else {
                    html! {
                        <button
                            class="btn btn-primary summary-btn"
                            onclick={on_summary}
                            disabled={props.summarizing}
                        >
                            {if props.summarizing { "Loading Summary..." } else { "Summary" }}
                        </button>
                    }
                }}
            </div>
        </header>
    }
}
