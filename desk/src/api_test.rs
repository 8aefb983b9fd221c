use super::*;

#[test]
fn return_endpoint_formats_expected_path() {
    assert_eq!(return_endpoint(42), "/api/prestamos/42/devolver");
}

#[test]
fn failure_message_prefers_server_error() {
    assert_eq!(failure_message(r#"{"error":"Préstamo no encontrado."}"#), "Préstamo no encontrado.");
}

#[test]
fn failure_message_falls_back_for_missing_or_invalid_body() {
    assert_eq!(failure_message(r#"{"detail":"x"}"#), UNKNOWN_ERROR);
    assert_eq!(failure_message(r#"{"error":""}"#), UNKNOWN_ERROR);
    assert_eq!(failure_message("<html>Bad Request</html>"), UNKNOWN_ERROR);
}

#[test]
fn mutation_outcome_returns_success_message() {
    assert_eq!(
        mutation_outcome(201, r#"{"success":"Registro guardado correctamente"}"#),
        Ok("Registro guardado correctamente".to_owned())
    );
}

#[test]
fn mutation_outcome_maps_error_status() {
    assert_eq!(
        mutation_outcome(400, r#"{"error":"Faltan campos requeridos"}"#),
        Err(ApiError::Status { status: 400, message: "Faltan campos requeridos".to_owned() })
    );
}

#[test]
fn mutation_outcome_rejects_unparsable_success_body() {
    assert!(matches!(mutation_outcome(200, "ok"), Err(ApiError::Decode(_))));
}

#[test]
fn ensure_success_checks_status_range() {
    assert_eq!(ensure_success(200, INITIAL_DATA_PATH), Ok(()));
    assert_eq!(
        ensure_success(500, EQUIPMENT_PATH),
        Err(ApiError::Status { status: 500, message: "/api/equipos failed: 500".to_owned() })
    );
}
