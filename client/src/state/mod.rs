//! Reactive state containers for the desk page.
//!
//! DESIGN
//! ======
//! State is held in plain structs wrapped by `RwSignal` at the app root;
//! domain rules stay in `desk::Desk`.

pub mod desk;
