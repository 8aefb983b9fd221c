use super::*;

fn loan(id: i64, nombre: &str, ubicacion: &str, pc: bool, pc_numero: Option<&str>) -> PendingLoan {
    PendingLoan {
        id,
        fecha: "2024-05-02".to_owned(),
        nombre: nombre.to_owned(),
        ubicacion: ubicacion.to_owned(),
        pc,
        pc_numero: pc_numero.map(ToOwned::to_owned),
        hora_inicio: "08:30".to_owned(),
    }
}

fn table() -> PendingTable {
    let mut table = PendingTable::default();
    table.replace(&[
        loan(1, "Ana Ruiz", "Aula 101", true, Some("12")),
        loan(2, "Luis Gómez", "Auditorio", false, None),
        loan(3, "Marta Díaz", "Sala de Juntas", false, Some("4")),
    ]);
    table
}

// =============================================================
// Row construction
// =============================================================

#[test]
fn pc_loans_annotate_location_with_number() {
    let rows = table();
    assert_eq!(rows.rows()[0].location, "Aula 101 (PC: 12)");
    assert_eq!(rows.rows()[1].location, "Auditorio");
}

#[test]
fn number_without_pc_flag_is_not_shown() {
    assert_eq!(table().rows()[2].location, "Sala de Juntas");
}

#[test]
fn cells_include_status_and_trigger_labels() {
    let cells = table().rows()[1].cells();
    assert_eq!(cells[0], "2");
    assert_eq!(cells[2], "Luis Gómez");
    assert_eq!(cells[5], STATUS_PENDING);
    assert_eq!(cells[6], RETURN_LABEL);
    assert_eq!(cells.len(), HEADERS.len());
}

#[test]
fn markup_in_fields_is_kept_as_literal_text() {
    let mut table = PendingTable::default();
    table.replace(&[loan(9, "<script>alert(1)</script>", "Aula <b>", false, None)]);
    let row = &table.rows()[0];
    assert_eq!(row.name, "<script>alert(1)</script>");
    assert_eq!(row.cells()[3], "Aula <b>");
}

#[test]
fn replace_rebuilds_rows() {
    let mut rows = table();
    rows.replace(&[loan(4, "Pedro", "Patio", false, None)]);
    assert_eq!(rows.rows().len(), 1);
    assert!(rows.contains(4));
    assert!(!rows.contains(1));
}

// =============================================================
// Empty state
// =============================================================

#[test]
fn empty_table_shows_informational_row() {
    let rows = PendingTable::default();
    assert!(rows.is_empty());
    assert!(rows.empty_state_visible());
    assert!(rows.visible_rows().is_empty());
}

#[test]
fn populated_table_hides_informational_row() {
    assert!(!table().empty_state_visible());
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_is_case_insensitive_substring() {
    let mut rows = table();
    rows.set_filter("ANA");
    let ids: Vec<i64> = rows.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);

    rows.set_filter("audit");
    let ids: Vec<i64> = rows.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn search_matches_annotated_pc_number() {
    let mut rows = table();
    rows.set_filter("pc: 12");
    let ids: Vec<i64> = rows.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn search_by_date_shows_all_rows_with_that_date() {
    let mut rows = table();
    rows.set_filter("2024-05");
    assert_eq!(rows.visible_rows().len(), 3);
}

#[test]
fn search_is_idempotent() {
    let mut rows = table();
    rows.set_filter("gómez");
    let first: Vec<i64> = rows.visible_rows().iter().map(|r| r.id).collect();
    rows.set_filter("gómez");
    let second: Vec<i64> = rows.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![2]);
}

#[test]
fn empty_filter_shows_everything() {
    let mut rows = table();
    rows.set_filter("zzz");
    assert!(rows.visible_rows().is_empty());
    rows.set_filter("");
    assert_eq!(rows.visible_rows().len(), 3);
}

#[test]
fn filter_survives_reload() {
    let mut rows = table();
    rows.set_filter("marta");
    rows.replace(&[loan(3, "Marta Díaz", "Sala", false, None), loan(5, "Otro", "Patio", false, None)]);
    let ids: Vec<i64> = rows.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn empty_state_row_is_filtered_too() {
    let mut rows = PendingTable::default();
    rows.set_filter("préstamos");
    assert!(rows.empty_state_visible());
    rows.set_filter("ana");
    assert!(!rows.empty_state_visible());
}
