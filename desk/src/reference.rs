//! Read-only reference data loaded once per session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Users, locations, assistants and PC units feed the form controls and the
//! dependent-field lookups. The data is never refreshed after mutations.

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;

use crate::model::{Assistant, Equipment, InitialData, Location, User};

/// Placeholder label for the location and assistant selectors.
pub const SELECT_PLACEHOLDER: &str = "Seleccione...";
/// Placeholder label for the PC-number selector.
pub const NUMBER_PLACEHOLDER: &str = "Nº";

/// One `<option>` of a select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Building carried by location options.
    pub building: Option<String>,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self { value: String::new(), label: label.to_owned(), building: None }
    }

    fn plain(value: String) -> Self {
        Self { label: value.clone(), value, building: None }
    }
}

/// Reference datasets backing the loan form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceData {
    users: Vec<User>,
    locations: Vec<Location>,
    assistants: Vec<Assistant>,
    equipment: Vec<Equipment>,
}

impl ReferenceData {
    #[must_use]
    pub fn new(initial: InitialData, equipment: Vec<Equipment>) -> Self {
        Self {
            users: initial.usuarios,
            locations: initial.ubicaciones,
            assistants: initial.auxiliares,
            equipment,
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn assistants(&self) -> &[Assistant] {
        &self.assistants
    }

    #[must_use]
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// Find a user by exact (case-sensitive) name.
    #[must_use]
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.nombre == name)
    }

    /// Building paired with a location; `None` for the empty option or an unknown name.
    #[must_use]
    pub fn building_for(&self, location: &str) -> Option<&str> {
        if location.is_empty() {
            return None;
        }
        self.locations
            .iter()
            .find(|l| l.nombre == location)
            .map(|l| l.edificio.as_str())
    }

    /// Owner of the PC unit whose id equals the parsed number.
    #[must_use]
    pub fn owner_of(&self, pc_number: &str) -> Option<&str> {
        let id = pc_number.trim().parse::<i64>().ok()?;
        self.equipment
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.pertenece.as_str())
    }

    #[must_use]
    pub fn is_location(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l.nombre == name)
    }

    #[must_use]
    pub fn is_assistant(&self, name: &str) -> bool {
        self.assistants.iter().any(|a| a.nombre == name)
    }

    #[must_use]
    pub fn is_equipment(&self, number: &str) -> bool {
        self.equipment.iter().any(|e| e.id.to_string() == number)
    }

    /// Names offered as free-text suggestions.
    #[must_use]
    pub fn name_suggestions(&self) -> Vec<String> {
        self.users.iter().map(|u| u.nombre.clone()).collect()
    }

    #[must_use]
    pub fn location_options(&self) -> Vec<SelectOption> {
        let mut options = vec![SelectOption::placeholder(SELECT_PLACEHOLDER)];
        options.extend(self.locations.iter().map(|l| SelectOption {
            value: l.nombre.clone(),
            label: l.nombre.clone(),
            building: Some(l.edificio.clone()),
        }));
        options
    }

    #[must_use]
    pub fn equipment_options(&self) -> Vec<SelectOption> {
        let mut options = vec![SelectOption::placeholder(NUMBER_PLACEHOLDER)];
        options.extend(self.equipment.iter().map(|e| SelectOption::plain(e.id.to_string())));
        options
    }

    /// Options shared by the "loaned by" and "received by" selectors.
    #[must_use]
    pub fn assistant_options(&self) -> Vec<SelectOption> {
        let mut options = vec![SelectOption::placeholder(SELECT_PLACEHOLDER)];
        options.extend(self.assistants.iter().map(|a| SelectOption::plain(a.nombre.clone())));
        options
    }
}
