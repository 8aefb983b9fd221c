//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::loans::LoansPage;
use crate::state::desk::DeskState;

/// Root application component.
///
/// Provides the desk state context read by every page and component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let desk = RwSignal::new(DeskState::default());
    provide_context(desk);

    view! {
        <Title text="Préstamos de equipos"/>
        <LoansPage/>
    }
}
