use super::*;
use crate::model::{Assistant, Equipment, InitialData, Location, User};

// =============================================================
// Helpers
// =============================================================

fn at(hour: u8, minute: u8) -> PrimitiveDateTime {
    time::Date::from_calendar_date(2024, time::Month::May, 2)
        .expect("date")
        .with_hms(hour, minute, 0)
        .expect("time")
}

fn reference() -> ReferenceData {
    ReferenceData::new(
        InitialData {
            usuarios: vec![User { id: "1001".to_owned(), nombre: "Ana Ruiz".to_owned(), area: "Sistemas".to_owned() }],
            ubicaciones: vec![Location { nombre: "Aula 101".to_owned(), edificio: "B".to_owned() }],
            auxiliares: vec![Assistant { nombre: "Carlos".to_owned() }],
        },
        vec![
            Equipment { id: 5, pertenece: "Biblioteca".to_owned() },
            Equipment { id: 12, pertenece: "Sistemas".to_owned() },
        ],
    )
}

fn filled_form(reference: &ReferenceData) -> LoanForm {
    let mut form = LoanForm::new(at(8, 30));
    form.set_name(reference, "Ana Ruiz");
    form.select_location(reference, "Aula 101");
    form.set_loaned_by(reference, "Carlos");
    form
}

// =============================================================
// Reset
// =============================================================

#[test]
fn new_form_is_stamped_with_date_and_time() {
    let form = LoanForm::new(at(7, 5));
    assert_eq!(form.date(), "2024-05-02");
    assert_eq!(form.start_time(), "07:05");
    assert!(!form.pc_number_visible());
    assert_eq!(form.name(), "");
}

#[test]
fn reset_clears_everything_and_restamps() {
    let data = reference();
    let mut form = filled_form(&data);
    form.set_pc(true);
    form.set_pc_number(&data, "12");
    form.set_accessory(Accessory::Kit, true);
    form.set_notes("cable extra");

    form.reset(at(16, 45));

    assert_eq!(form, LoanForm::new(at(16, 45)));
    assert_eq!(form.identification(), "");
    assert_eq!(form.building(), "");
    assert!(!form.pc_number_visible());
    assert!(!form.accessory(Accessory::Kit));
}

#[test]
fn format_helpers_zero_pad() {
    let stamp = time::Date::from_calendar_date(2025, time::Month::January, 9)
        .expect("date")
        .with_hms(9, 3, 59)
        .expect("time");
    assert_eq!(format_date(stamp), "2025-01-09");
    assert_eq!(format_time(stamp), "09:03");
}

// =============================================================
// Dependent fields
// =============================================================

#[test]
fn known_name_fills_identification_and_area() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    form.set_name(&data, "Ana Ruiz");
    assert_eq!(form.identification(), "1001");
    assert_eq!(form.area(), "Sistemas");
}

#[test]
fn unknown_name_clears_identification_and_area() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    form.set_name(&data, "Ana Ruiz");
    form.set_name(&data, "Ana Rui");
    assert_eq!(form.name(), "Ana Rui");
    assert_eq!(form.identification(), "");
    assert_eq!(form.area(), "");
}

#[test]
fn location_fills_building_and_empty_option_clears_it() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    form.select_location(&data, "Aula 101");
    assert_eq!(form.building(), "B");

    form.select_location(&data, "");
    assert_eq!(form.location(), "");
    assert_eq!(form.building(), "");
}

#[test]
fn unknown_location_behaves_like_empty_option() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    form.select_location(&data, "Aula 101");
    form.select_location(&data, "Azotea");
    assert_eq!(form.location(), "");
    assert_eq!(form.building(), "");
}

#[test]
fn pc_toggle_shows_and_clears_number() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    form.set_pc(true);
    assert!(form.pc_number_visible());
    form.set_pc_number(&data, "12");
    assert_eq!(form.pc_number(), "12");

    form.set_pc(false);
    assert!(!form.pc_number_visible());
    assert_eq!(form.pc_number(), "");
}

#[test]
fn select_setters_reject_values_without_options() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    form.set_pc_number(&data, "99");
    assert_eq!(form.pc_number(), "");
    form.set_loaned_by(&data, "Desconocido");
    assert_eq!(form.loaned_by(), "");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn unknown_typed_name_blocks_submission() {
    let data = reference();
    let mut form = filled_form(&data);
    form.set_name(&data, "Alguien Más");
    assert_eq!(form.build_submission(&data), Err(FormError::UnknownName));
}

#[test]
fn unknown_name_is_reported_before_missing_pc_number() {
    let data = reference();
    let mut form = filled_form(&data);
    form.set_name(&data, "Nadie");
    form.set_pc(true);
    assert_eq!(form.build_submission(&data), Err(FormError::UnknownName));
}

#[test]
fn pc_without_number_blocks_submission() {
    let data = reference();
    let mut form = filled_form(&data);
    form.set_pc(true);
    assert_eq!(form.build_submission(&data), Err(FormError::MissingPcNumber));
}

#[test]
fn missing_required_fields_are_named() {
    let data = reference();
    let mut form = LoanForm::new(at(8, 0));
    assert_eq!(form.build_submission(&data), Err(FormError::MissingField("identificacion")));

    form.set_name(&data, "Ana Ruiz");
    assert_eq!(form.build_submission(&data), Err(FormError::MissingField("ubicacion")));

    form.select_location(&data, "Aula 101");
    assert_eq!(form.build_submission(&data), Err(FormError::MissingField("prestado_por")));

    form.set_loaned_by(&data, "Carlos");
    form.set_start_time("  ");
    assert_eq!(form.build_submission(&data), Err(FormError::MissingField("hora_inicio")));
}

#[test]
fn submission_without_pc_sends_null_number_and_owner() {
    let data = reference();
    let mut form = filled_form(&data);
    form.set_accessory(Accessory::Vbeam, true);
    form.set_notes("<b>urgente</b>");

    let loan = form.build_submission(&data).expect("valid form");
    assert_eq!(loan.fecha, "2024-05-02");
    assert_eq!(loan.hora_inicio, "08:30");
    assert_eq!(loan.identificacion, "1001");
    assert_eq!(loan.area, "Sistemas");
    assert_eq!(loan.edificio, "B");
    assert_eq!(loan.prestado_por, "Carlos");
    assert_eq!(loan.observaciones, "<b>urgente</b>");
    assert!(!loan.pc);
    assert_eq!(loan.pc_numero, None);
    assert_eq!(loan.pc_pertenece, None);
    assert!(loan.vbeam);
    assert!(!loan.kit);
}

#[test]
fn submission_with_pc_resolves_owner_from_equipment() {
    let data = reference();
    let mut form = filled_form(&data);
    form.set_pc(true);
    form.set_pc_number(&data, "12");

    let loan = form.build_submission(&data).expect("valid form");
    assert!(loan.pc);
    assert_eq!(loan.pc_numero.as_deref(), Some("12"));
    assert_eq!(loan.pc_pertenece.as_deref(), Some("Sistemas"));
}

#[test]
fn accessory_field_names_match_wire_keys() {
    let fields: Vec<&str> = Accessory::ALL.iter().map(|a| a.field()).collect();
    assert_eq!(fields, vec!["kit", "aire", "cabinas", "consola", "vbeam"]);
}
