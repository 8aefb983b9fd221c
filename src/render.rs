//! Plain-text rendering for the terminal.
//!
//! Server data is printed verbatim except for control characters, which are
//! replaced so names or notes cannot inject terminal escape sequences.

use std::fmt::Write as _;

use desk::table::{EMPTY_MESSAGE, HEADERS};
use desk::{PendingTable, ReferenceData};

/// Columns shown in the terminal; the action column has no meaning here.
const TABLE_COLUMNS: usize = 6;

/// Replace control characters with a space.
pub fn sanitize(text: &str) -> String {
    text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

/// Visible rows of the pending table as aligned columns.
pub fn pending_table(table: &PendingTable) -> String {
    if table.empty_state_visible() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let rows: Vec<Vec<String>> = table
        .visible_rows()
        .into_iter()
        .map(|row| row.cells().iter().take(TABLE_COLUMNS).map(|cell| sanitize(cell)).collect())
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().take(TABLE_COLUMNS).map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().take(TABLE_COLUMNS).copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Users, locations, assistants, and equipment, one section each.
pub fn reference(reference: &ReferenceData) -> String {
    let mut out = String::new();

    out.push_str("Usuarios\n");
    for user in reference.users() {
        let _ = writeln!(out, "  {}  {}  {}", sanitize(&user.id), sanitize(&user.nombre), sanitize(&user.area));
    }

    out.push_str("Ubicaciones\n");
    for location in reference.locations() {
        let _ = writeln!(out, "  {} ({})", sanitize(&location.nombre), sanitize(&location.edificio));
    }

    out.push_str("Auxiliares\n");
    for assistant in reference.assistants() {
        let _ = writeln!(out, "  {}", sanitize(&assistant.nombre));
    }

    out.push_str("Equipos\n");
    for equipment in reference.equipment() {
        let _ = writeln!(out, "  PC {}  {}", equipment.id, sanitize(&equipment.pertenece));
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
