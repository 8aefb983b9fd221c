//! Modal that records who received a returned loan.

use leptos::prelude::*;

use crate::components::loan_form::option_views;
use crate::state::desk::DeskState;
use crate::util::notify;

/// Return confirmation dialog; shown while the return flow is open.
#[component]
pub fn ReturnModal() -> impl IntoView {
    let state = expect_context::<RwSignal<DeskState>>();

    let on_cancel = Callback::new(move |()| state.update(|s| s.desk.cancel_return()));
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });

    let on_confirm = move |_| {
        if !state.with_untracked(DeskState::can_mutate) {
            return;
        }
        let (loan_id, request) = match state.with_untracked(|s| s.desk.returns().prepare()) {
            Ok(prepared) => prepared,
            Err(error) => {
                notify::alert(&error.to_string());
                return;
            }
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let api = state.with_untracked(DeskState::api);
            match crate::pages::loans::return_loan(state, &api, loan_id, request).await {
                Ok(message) => notify::alert(&message),
                Err(error) => notify::alert_error("Error al registrar la devolución", &error),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (loan_id, request);
        }
    };

    let loan_label = move || {
        state.with(|s| s.desk.returns().loan_id().map(|id| format!("Préstamo #{id}")).unwrap_or_default())
    };

    view! {
        <Show when=move || state.with(|s| s.desk.returns().is_open())>
            <div id="devolucion-modal" class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog dialog--return"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <h2>"Registrar devolución"</h2>
                    <p class="dialog__subtitle">{loan_label}</p>
                    <label>
                        "Recibido por"
                        <select
                            id="modal-recibido-por"
                            prop:value=move || state.with(|s| s.desk.returns().receiver().to_owned())
                            on:change=move |ev| state.update(|s| s.desk.select_receiver(&event_target_value(&ev)))
                        >
                            {move || option_views(state.with(|s| s.desk.reference().assistant_options()))}
                        </select>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" id="modal-btn-cancelar" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button
                            type="button"
                            id="modal-btn-confirmar"
                            class="btn btn--primary"
                            disabled=move || state.with(|s| s.busy)
                            on:click=on_confirm
                        >
                            "Confirmar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
