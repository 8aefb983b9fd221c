use desk::{Assistant, Equipment, InitialData, Location, PendingLoan, User};

use super::*;

fn loan(id: i64, nombre: &str, pc_numero: Option<&str>) -> PendingLoan {
    PendingLoan {
        id,
        fecha: "2024-05-02".to_owned(),
        nombre: nombre.to_owned(),
        ubicacion: "Aula 101".to_owned(),
        pc: pc_numero.is_some(),
        pc_numero: pc_numero.map(str::to_owned),
        hora_inicio: "08:30".to_owned(),
    }
}

fn table(loans: &[PendingLoan]) -> PendingTable {
    let mut table = PendingTable::default();
    table.replace(loans);
    table
}

#[test]
fn sanitize_neutralises_escape_sequences() {
    assert_eq!(sanitize("Ana\u{1b}[31m"), "Ana [31m");
    assert_eq!(sanitize("a\nb\tc"), "a b c");
    assert_eq!(sanitize("<b>Ana</b>"), "<b>Ana</b>");
}

#[test]
fn empty_table_prints_message() {
    assert_eq!(pending_table(&table(&[])), format!("{EMPTY_MESSAGE}\n"));
}

#[test]
fn table_prints_header_and_rows() {
    let out = pending_table(&table(&[loan(3, "Ana Pérez", Some("12")), loan(4, "Luis", None)]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[0].contains("Estado"));
    assert!(!lines[0].contains("Acción"));
    assert!(lines[1].contains("Aula 101 (PC: 12)"));
    assert!(lines[1].contains("Pendiente"));
    assert!(lines[2].starts_with('4'));
}

#[test]
fn filtered_out_rows_are_not_printed() {
    let mut table = table(&[loan(3, "Ana", None), loan(4, "Luis", None)]);
    table.set_filter("luis");
    let out = pending_table(&table);
    assert!(out.contains("Luis"));
    assert!(!out.contains("Ana"));
}

#[test]
fn reference_lists_every_section() {
    let initial = InitialData {
        usuarios: vec![User { id: "1001".to_owned(), nombre: "Ana".to_owned(), area: "Sistemas".to_owned() }],
        ubicaciones: vec![Location { nombre: "Aula 101".to_owned(), edificio: "Bloque A".to_owned() }],
        auxiliares: vec![Assistant { nombre: "Carlos".to_owned() }],
    };
    let equipment = vec![Equipment { id: 12, pertenece: "Biblioteca".to_owned() }];
    let out = reference(&ReferenceData::new(initial, equipment));
    assert!(out.contains("1001  Ana  Sistemas"));
    assert!(out.contains("Aula 101 (Bloque A)"));
    assert!(out.contains("  Carlos\n"));
    assert!(out.contains("PC 12  Biblioteca"));
}
