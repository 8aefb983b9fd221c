//! New-loan form.
//!
//! Every input writes straight into `desk::Desk`; the rendered values are read
//! back from the form so lookups (identification, area, building) and the
//! select fallbacks show up immediately.

use desk::{Accessory, LoanForm, SelectOption};
use leptos::prelude::*;

use crate::state::desk::DeskState;
use crate::util::{clock, notify};

/// `<option>` children for a select; location options carry `data-edificio`.
pub(crate) fn option_views(options: Vec<SelectOption>) -> impl IntoView {
    options
        .into_iter()
        .map(|option| {
            view! { <option value=option.value data-edificio=option.building>{option.label}</option> }
        })
        .collect_view()
}

/// Loan registration form with name autocomplete and equipment checkboxes.
#[component]
pub fn LoanFormPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<DeskState>>();

    let field = move |read: fn(&LoanForm) -> &str| state.with(|s| read(s.desk.form()).to_owned());
    let disabled = move || !state.with(DeskState::can_mutate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.with_untracked(DeskState::can_mutate) {
            return;
        }
        let loan = match state.with_untracked(|s| s.desk.prepare_submission()) {
            Ok(loan) => loan,
            Err(error) => {
                notify::alert(&error.to_string());
                return;
            }
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let api = state.with_untracked(DeskState::api);
            match crate::pages::loans::submit_loan(state, &api, loan).await {
                Ok(message) => notify::alert(&message),
                Err(error) => notify::alert_error("Error al guardar el préstamo", &error),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = loan;
        }
    };

    let on_clear = move |_| state.update(|s| s.desk.clear_form(clock::now()));

    let suggestions = move || {
        state
            .with(|s| s.desk.reference().name_suggestions())
            .into_iter()
            .map(|name| view! { <option value=name></option> })
            .collect_view()
    };

    let accessories = Accessory::ALL
        .into_iter()
        .map(|accessory| {
            view! {
                <label class="loan-form__check">
                    <input
                        type="checkbox"
                        id=accessory.field()
                        prop:checked=move || state.with(|s| s.desk.form().accessory(accessory))
                        on:change=move |ev| state.update(|s| s.desk.set_accessory(accessory, event_target_checked(&ev)))
                    />
                    {accessory.label()}
                </label>
            }
        })
        .collect_view();

    view! {
        <form id="prestamo-form" class="loan-form" on:submit=on_submit>
            <h2>"Nuevo préstamo"</h2>
            <fieldset class="loan-form__fields" disabled=disabled>
                <div class="loan-form__row">
                    <label>
                        "Fecha"
                        <input
                            type="date"
                            id="fecha"
                            required=true
                            prop:value=move || field(LoanForm::date)
                            on:input=move |ev| state.update(|s| s.desk.set_date(&event_target_value(&ev)))
                        />
                    </label>
                    <label>
                        "Hora inicio"
                        <input
                            type="time"
                            id="hora_inicio"
                            required=true
                            prop:value=move || field(LoanForm::start_time)
                            on:input=move |ev| state.update(|s| s.desk.set_start_time(&event_target_value(&ev)))
                        />
                    </label>
                </div>

                <div class="loan-form__row">
                    <label>
                        "Nombre"
                        <input
                            type="text"
                            id="nombre"
                            list="nombres-list"
                            autocomplete="off"
                            required=true
                            prop:value=move || field(LoanForm::name)
                            on:input=move |ev| state.update(|s| s.desk.set_name(&event_target_value(&ev)))
                        />
                        <datalist id="nombres-list">{suggestions}</datalist>
                    </label>
                    <label>
                        "Identificación"
                        <input type="text" id="identificacion" readonly=true prop:value=move || field(LoanForm::identification)/>
                    </label>
                    <label>
                        "Área"
                        <input type="text" id="area" readonly=true prop:value=move || field(LoanForm::area)/>
                    </label>
                </div>

                <div class="loan-form__row">
                    <label>
                        "Ubicación"
                        <select
                            id="ubicacion"
                            required=true
                            prop:value=move || field(LoanForm::location)
                            on:change=move |ev| state.update(|s| s.desk.select_location(&event_target_value(&ev)))
                        >
                            {move || option_views(state.with(|s| s.desk.reference().location_options()))}
                        </select>
                    </label>
                    <label>
                        "Edificio"
                        <input type="text" id="edificio" readonly=true prop:value=move || field(LoanForm::building)/>
                    </label>
                    <label>
                        "Prestado por"
                        <select
                            id="prestado_por"
                            required=true
                            prop:value=move || field(LoanForm::loaned_by)
                            on:change=move |ev| state.update(|s| s.desk.set_loaned_by(&event_target_value(&ev)))
                        >
                            {move || option_views(state.with(|s| s.desk.reference().assistant_options()))}
                        </select>
                    </label>
                </div>

                <div class="loan-form__row loan-form__equipment">
                    <label class="loan-form__check">
                        <input
                            type="checkbox"
                            id="pc"
                            prop:checked=move || state.with(|s| s.desk.form().pc())
                            on:change=move |ev| state.update(|s| s.desk.set_pc(event_target_checked(&ev)))
                        />
                        "PC"
                    </label>
                    <div id="pc-numero-group" class:hidden=move || !state.with(|s| s.desk.form().pc_number_visible())>
                        <select
                            id="pc_numero"
                            prop:value=move || field(LoanForm::pc_number)
                            on:change=move |ev| state.update(|s| s.desk.set_pc_number(&event_target_value(&ev)))
                        >
                            {move || option_views(state.with(|s| s.desk.reference().equipment_options()))}
                        </select>
                    </div>
                    {accessories}
                </div>

                <label class="loan-form__notes">
                    "Observaciones"
                    <textarea
                        id="observaciones"
                        rows="3"
                        prop:value=move || field(LoanForm::notes)
                        on:input=move |ev| state.update(|s| s.desk.set_notes(&event_target_value(&ev)))
                    ></textarea>
                </label>

                <div class="loan-form__actions">
                    <button type="submit" class="btn btn--primary">"Registrar préstamo"</button>
                    <button type="button" class="btn" on:click=on_clear>"Limpiar"</button>
                </div>
            </fieldset>
        </form>
    }
}
