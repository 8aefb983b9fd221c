//! Pending-loans table model and client-side search.
//!
//! Rows are built from typed fields only. Front ends render every cell as
//! plain text, so names or notes containing markup are shown verbatim.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::model::PendingLoan;

/// Informational row shown when nothing is pending.
pub const EMPTY_MESSAGE: &str = "No hay préstamos pendientes.";
/// Status label of every row in the table.
pub const STATUS_PENDING: &str = "Pendiente";
/// Label of the per-row return trigger.
pub const RETURN_LABEL: &str = "Devolver";
/// Column headers, in cell order.
pub const HEADERS: [&str; 7] = ["ID", "Fecha", "Nombre", "Ubicación", "Hora inicio", "Estado", "Acción"];

/// One rendered row of the pending table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRow {
    /// Loan id, also carried by the return trigger.
    pub id: i64,
    pub date: String,
    pub name: String,
    /// Location, annotated with the PC number when the loan includes one.
    pub location: String,
    pub start_time: String,
}

impl PendingRow {
    /// Cell texts in column order, including the status label and trigger label.
    #[must_use]
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.date.clone(),
            self.name.clone(),
            self.location.clone(),
            self.start_time.clone(),
            STATUS_PENDING.to_owned(),
            RETURN_LABEL.to_owned(),
        ]
    }

    /// Full text content of the row, lower-cased for search.
    #[must_use]
    pub fn search_text(&self) -> String {
        self.cells().join(" ").to_lowercase()
    }
}

impl From<&PendingLoan> for PendingRow {
    fn from(loan: &PendingLoan) -> Self {
        let location = match loan.pc_numero.as_deref() {
            Some(number) if loan.pc && !number.is_empty() => format!("{} (PC: {number})", loan.ubicacion),
            _ => loan.ubicacion.clone(),
        };
        Self {
            id: loan.id,
            date: loan.fecha.clone(),
            name: loan.nombre.clone(),
            location,
            start_time: loan.hora_inicio.clone(),
        }
    }
}

/// Pending loans as displayed, plus the active search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingTable {
    rows: Vec<PendingRow>,
    filter: String,
}

impl PendingTable {
    /// Drop every row and rebuild from a fresh server listing.
    pub fn replace(&mut self, loans: &[PendingLoan]) {
        self.rows = loans.iter().map(PendingRow::from).collect();
    }

    pub fn set_filter(&mut self, term: &str) {
        self.filter = term.to_lowercase();
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn rows(&self) -> &[PendingRow] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }

    /// Whether a row's text content contains the search term.
    #[must_use]
    pub fn is_visible(&self, row: &PendingRow) -> bool {
        row.search_text().contains(&self.filter)
    }

    /// Rows that survive the current search term.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&PendingRow> {
        self.rows.iter().filter(|r| self.is_visible(r)).collect()
    }

    /// The empty-state row is itself subject to the search term.
    #[must_use]
    pub fn empty_state_visible(&self) -> bool {
        self.rows.is_empty() && EMPTY_MESSAGE.to_lowercase().contains(&self.filter)
    }
}
