//! Loan form state with dependent-field sync and submission building.
//!
//! DESIGN
//! ======
//! Fields are only written through the setters so the derived values
//! (identification, area, building, PC-number visibility) never drift from the
//! inputs they depend on. Select-backed setters follow `<select>` semantics: a
//! value with no matching option leaves the control on its empty option.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use time::PrimitiveDateTime;

use crate::error::FormError;
use crate::model::NewLoan;
use crate::reference::ReferenceData;

/// Optional equipment that can travel with a loan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accessory {
    Kit,
    Aire,
    Cabinas,
    Consola,
    Vbeam,
}

impl Accessory {
    pub const ALL: [Self; 5] = [Self::Kit, Self::Aire, Self::Cabinas, Self::Consola, Self::Vbeam];

    /// Wire field name, also used as the checkbox id.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Kit => "kit",
            Self::Aire => "aire",
            Self::Cabinas => "cabinas",
            Self::Consola => "consola",
            Self::Vbeam => "vbeam",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kit => "Kit de audio",
            Self::Aire => "Aire acondicionado",
            Self::Cabinas => "Cabinas",
            Self::Consola => "Consola",
            Self::Vbeam => "Video beam",
        }
    }
}

/// Current contents of the new-loan form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanForm {
    date: String,
    start_time: String,
    name: String,
    identification: String,
    area: String,
    location: String,
    building: String,
    loaned_by: String,
    notes: String,
    pc: bool,
    pc_number: String,
    kit: bool,
    aire: bool,
    cabinas: bool,
    consola: bool,
    vbeam: bool,
}

/// `YYYY-MM-DD`, the value format of a date input.
#[must_use]
pub fn format_date(now: PrimitiveDateTime) -> String {
    let date = now.date();
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// `HH:MM`, the value format of a time input.
#[must_use]
pub fn format_time(now: PrimitiveDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

impl LoanForm {
    /// A freshly reset form stamped with `now`.
    #[must_use]
    pub fn new(now: PrimitiveDateTime) -> Self {
        let mut form = Self::default();
        form.reset(now);
        form
    }

    /// Clear every field, stamp today's date and the current time, hide the PC number.
    pub fn reset(&mut self, now: PrimitiveDateTime) {
        *self = Self {
            date: format_date(now),
            start_time: format_time(now),
            ..Self::default()
        };
    }

    /// Typing in the name box resolves identification and area by exact match.
    pub fn set_name(&mut self, reference: &ReferenceData, name: &str) {
        self.name = name.to_owned();
        match reference.user_by_name(name) {
            Some(user) => {
                self.identification.clone_from(&user.id);
                self.area.clone_from(&user.area);
            }
            None => {
                self.identification.clear();
                self.area.clear();
            }
        }
    }

    /// Choosing a location copies its building.
    pub fn select_location(&mut self, reference: &ReferenceData, location: &str) {
        match reference.building_for(location) {
            Some(building) => {
                self.location = location.to_owned();
                self.building = building.to_owned();
            }
            None => {
                self.location.clear();
                self.building.clear();
            }
        }
    }

    /// Checking PC reveals the number selector; unchecking clears and hides it.
    pub fn set_pc(&mut self, checked: bool) {
        self.pc = checked;
        if !checked {
            self.pc_number.clear();
        }
    }

    pub fn set_pc_number(&mut self, reference: &ReferenceData, number: &str) {
        if reference.is_equipment(number) {
            self.pc_number = number.to_owned();
        } else {
            self.pc_number.clear();
        }
    }

    pub fn set_loaned_by(&mut self, reference: &ReferenceData, assistant: &str) {
        if reference.is_assistant(assistant) {
            self.loaned_by = assistant.to_owned();
        } else {
            self.loaned_by.clear();
        }
    }

    pub fn set_accessory(&mut self, accessory: Accessory, checked: bool) {
        match accessory {
            Accessory::Kit => self.kit = checked,
            Accessory::Aire => self.aire = checked,
            Accessory::Cabinas => self.cabinas = checked,
            Accessory::Consola => self.consola = checked,
            Accessory::Vbeam => self.vbeam = checked,
        }
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_owned();
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_owned();
    }

    pub fn set_start_time(&mut self, start_time: &str) {
        self.start_time = start_time.to_owned();
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn identification(&self) -> &str {
        &self.identification
    }

    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn building(&self) -> &str {
        &self.building
    }

    #[must_use]
    pub fn loaned_by(&self) -> &str {
        &self.loaned_by
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub fn pc(&self) -> bool {
        self.pc
    }

    #[must_use]
    pub fn pc_number(&self) -> &str {
        &self.pc_number
    }

    /// The PC-number group is shown exactly while the PC box is checked.
    #[must_use]
    pub fn pc_number_visible(&self) -> bool {
        self.pc
    }

    #[must_use]
    pub fn accessory(&self, accessory: Accessory) -> bool {
        match accessory {
            Accessory::Kit => self.kit,
            Accessory::Aire => self.aire,
            Accessory::Cabinas => self.cabinas,
            Accessory::Consola => self.consola,
            Accessory::Vbeam => self.vbeam,
        }
    }

    /// Validate the form and build the record for `POST /api/prestamos`.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownName`] when a typed name resolved to no user,
    /// [`FormError::MissingPcNumber`] when PC is checked without a number, and
    /// [`FormError::MissingField`] for any other empty required field.
    pub fn build_submission(&self, reference: &ReferenceData) -> Result<NewLoan, FormError> {
        if !self.name.is_empty() && self.identification.is_empty() {
            return Err(FormError::UnknownName);
        }
        if self.pc && self.pc_number.is_empty() {
            return Err(FormError::MissingPcNumber);
        }

        let required = [
            ("fecha", &self.date),
            ("identificacion", &self.identification),
            ("nombre", &self.name),
            ("ubicacion", &self.location),
            ("hora_inicio", &self.start_time),
            ("prestado_por", &self.loaned_by),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FormError::MissingField(field));
        }

        let pc_numero = self.pc.then(|| self.pc_number.clone());
        let pc_pertenece = pc_numero
            .as_deref()
            .and_then(|number| reference.owner_of(number))
            .map(ToOwned::to_owned);

        Ok(NewLoan {
            fecha: self.date.clone(),
            identificacion: self.identification.clone(),
            nombre: self.name.clone(),
            area: self.area.clone(),
            ubicacion: self.location.clone(),
            edificio: self.building.clone(),
            hora_inicio: self.start_time.clone(),
            prestado_por: self.loaned_by.clone(),
            observaciones: self.notes.clone(),
            pc: self.pc,
            pc_numero,
            pc_pertenece,
            kit: self.kit,
            aire: self.aire,
            cabinas: self.cabinas,
            consola: self.consola,
            vbeam: self.vbeam,
        })
    }
}
