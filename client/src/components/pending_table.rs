//! Pending-loans table with live search.

use desk::PendingRow;
use desk::table::{EMPTY_MESSAGE, HEADERS, RETURN_LABEL, STATUS_PENDING};
use leptos::prelude::*;

use crate::state::desk::DeskState;
use crate::util::notify;

/// Table of loans not yet returned, filtered by the search box.
#[component]
pub fn PendingLoansTable() -> impl IntoView {
    let state = expect_context::<RwSignal<DeskState>>();

    let on_return = Callback::new(move |loan_id: i64| {
        state.update(|s| {
            if let Err(error) = s.desk.open_return(loan_id) {
                notify::log_error("Devolución", &error);
            }
        });
    });

    let rows = move || {
        state.with(|s| s.desk.table().visible_rows().into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="registros">
            <div class="registros__toolbar">
                <h2>"Préstamos pendientes"</h2>
                <input
                    type="search"
                    id="search-input"
                    placeholder="Buscar..."
                    on:input=move |ev| state.update(|s| s.desk.search(&event_target_value(&ev)))
                />
                <a class="btn" href="/export/excel">"Exportar Excel"</a>
                <a class="btn" href="/export/pdf">"Exportar PDF"</a>
            </div>
            <table id="registros-table" class="registros__table">
                <thead>
                    <tr>{HEADERS.iter().map(|header| view! { <th>{*header}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    <Show when=move || state.with(|s| s.desk.table().empty_state_visible())>
                        <tr class="registros__empty">
                            <td colspan="7">{EMPTY_MESSAGE}</td>
                        </tr>
                    </Show>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| view! { <PendingRowView row=row on_return=on_return/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn PendingRowView(row: PendingRow, on_return: Callback<i64>) -> impl IntoView {
    let loan_id = row.id;
    view! {
        <tr>
            <td>{loan_id.to_string()}</td>
            <td>{row.date}</td>
            <td>{row.name}</td>
            <td>{row.location}</td>
            <td>{row.start_time}</td>
            <td>
                <span class="status-pendiente">{STATUS_PENDING}</span>
            </td>
            <td>
                <button
                    type="button"
                    class="btn btn-devolver"
                    data-id=loan_id.to_string()
                    on:click=move |_| on_return.run(loan_id)
                >
                    {RETURN_LABEL}
                </button>
            </td>
        </tr>
    }
}
