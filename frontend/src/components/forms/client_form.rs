use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::{dates, Client, ClientForm, FormEdit};

#[derive(Properties, PartialEq)]
pub struct ClientEditFormProps {
    pub client: Client,
    /// A save is in flight; the form stays open but cannot submit again
    pub saving: bool,
    pub on_save: Callback<Client>,
    pub on_cancel: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct ReadOnlyFieldProps {
    id: AttrValue,
    label: AttrValue,
    value: AttrValue,
}

#[function_component(ReadOnlyField)]
fn read_only_field(props: &ReadOnlyFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.as_str()}</label>
            <input type="text" id={props.id.clone()} value={props.value.clone()} disabled={true} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DateFieldProps {
    id: AttrValue,
    label: AttrValue,
    value: String,
    error: bool,
    disabled: bool,
    /// Raw text typed into the field
    on_input: Callback<String>,
    /// Value picked from the browser calendar (yyyy-mm-dd)
    on_pick: Callback<String>,
}

/// Text field holding the canonical dd.mm.yyyy string, with a calendar next to it
#[function_component(DateField)]
fn date_field(props: &DateFieldProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let on_pick = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_pick.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.as_str()}</label>
            <div class="date-field">
                <input
                    type="text"
                    id={props.id.clone()}
                    class={classes!(props.error.then_some("input-error"))}
                    placeholder="dd.mm.yyyy"
                    value={props.value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
                <input
                    type="date"
                    class="date-picker"
                    aria-label={format!("{} picker", props.label)}
                    value={dates::to_iso(&props.value)}
                    onchange={on_pick}
                    disabled={props.disabled}
                />
            </div>
            {if props.error {
                html! { <span class="field-error">{"Invalid date format"}</span> }
            } else { html! {} }}
        </div>
    }
}

#[function_component(ClientEditForm)]
pub fn client_edit_form(props: &ClientEditFormProps) -> Html {
    let form = use_state(|| ClientForm::new(&props.client));

    // Picking another client discards whatever was typed for the previous one
    use_effect_with(props.client.clone(), {
        let form = form.clone();
        move |client| {
            form.set(ClientForm::new(client));
            || ()
        }
    });

    let on_edit = {
        let form = form.clone();
        Callback::from(move |edit: FormEdit| {
            let mut next = (*form).clone();
            next.apply(edit);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        let saving = props.saving;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if saving {
                return;
            }

            let mut next = (*form).clone();
            let updated = next.submit();
            form.set(next);
            if let Some(updated) = updated {
                on_save.emit(updated);
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_total = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FormEdit::Total(input.value()));
        })
    };

    let info = &form.client().info;
    let currency = form.client().balance.currency.clone();

    html! {
        <section class="edit-client-section">
            <h2>{"Edit Client"}</h2>
            <form class="edit-client-form" onsubmit={on_submit}>
                <ReadOnlyField id="name" label="Name" value={info.name.clone()} />
                <ReadOnlyField id="surname" label="Surname" value={info.surname.clone()} />
                <ReadOnlyField id="country" label="Country" value={info.country.clone().unwrap_or_default()} />

                <div class="form-group">
                    <label for="balance">{"Balance"}</label>
                    <input
                        type="text"
                        id="balance"
                        value={form.total.clone()}
                        oninput={on_total}
                        disabled={props.saving}
                    />
                </div>
                <ReadOnlyField id="currency" label="Currency" value={currency} />
                <DateField
                    id="balanceDate"
                    label="Balance Date"
                    value={form.balance_date.clone()}
                    error={form.balance_date_error}
                    disabled={props.saving}
                    on_input={on_edit.reform(FormEdit::BalanceDate)}
                    on_pick={on_edit.reform(FormEdit::PickBalanceDate)}
                />

                {if form.transactions.is_empty() {
                    html! {}
                } else {
                    html! {
                        <fieldset class="transactions-fieldset">
                            <legend>{"Transactions"}</legend>
                            {for form.transactions.iter().enumerate().map(|(index, draft)| {
                                let original = &form.client().transactions[index];
                                let on_description = {
                                    let on_edit = on_edit.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        on_edit.emit(FormEdit::TransactionDescription(index, input.value()));
                                    })
                                };
                                let on_value = {
                                    let on_edit = on_edit.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        on_edit.emit(FormEdit::TransactionValue(index, input.value()));
                                    })
                                };

                                html! {
                                    <div class="transaction-draft">
                                        <span class={original.transaction_type.css_class()}>
                                            {format!("{} ({})", original.transaction_type, original.currency)}
                                        </span>
                                        <div class="form-group">
                                            <label for={format!("transaction-{}-description", index)}>{"Description"}</label>
                                            <input
                                                type="text"
                                                id={format!("transaction-{}-description", index)}
                                                value={draft.description.clone()}
                                                oninput={on_description}
                                                disabled={props.saving}
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label for={format!("transaction-{}-value", index)}>{"Value"}</label>
                                            <input
                                                type="text"
                                                id={format!("transaction-{}-value", index)}
                                                value={draft.value.clone()}
                                                oninput={on_value}
                                                disabled={props.saving}
                                            />
                                        </div>
                                        <DateField
                                            id={format!("transaction-{}-date", index)}
                                            label="Date"
                                            value={draft.date.clone()}
                                            error={draft.date_error}
                                            disabled={props.saving}
                                            on_input={on_edit.reform(move |date: String| FormEdit::TransactionDate(index, date))}
                                            on_pick={on_edit.reform(move |date: String| FormEdit::PickTransactionDate(index, date))}
                                        />
                                    </div>
                                }
                            })}
                        </fieldset>
                    }
                }}

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={props.saving}>
                        {if props.saving { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={props.saving}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </section>
    }
}
