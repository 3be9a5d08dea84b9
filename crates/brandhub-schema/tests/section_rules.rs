use brandhub_model::{SectionData, SectionKind};
use brandhub_schema::{validate, ValidationError};
use serde_json::json;

#[test]
fn section_defaults_apply_inside_records() {
    let brand = validate(&json!({
        "id": "acme",
        "sections": [{ "id": "sec-qr", "type": "qr", "title": "QR" }]
    }))
    .unwrap();

    let section = brand.section(SectionKind::Qr).unwrap();
    assert!(section.is_visible);
    assert_eq!(section.order, 0);
    assert!(matches!(section.data, SectionData::Qr(_)));
}

#[test]
fn unknown_section_type_is_rejected() {
    let result = validate(&json!({
        "id": "acme",
        "sections": [{ "id": "x", "type": "sidebar", "title": "X" }]
    }));
    assert!(matches!(result, Err(ValidationError::Shape(_))));
}

#[test]
fn mismatched_section_payload_is_rejected() {
    let result = validate(&json!({
        "id": "acme",
        "sections": [{ "id": "sec-colors", "type": "colors", "title": "C", "data": { "hex": 1 } }]
    }));
    assert!(result.is_err());
}

#[test]
fn broken_gradient_is_coerced_not_rejected() {
    let brand = validate(&json!({
        "id": "acme",
        "gradients": [{ "name": "Flat", "css": "#ff0000" }]
    }))
    .unwrap();
    assert_eq!(brand.gradients[0].css, brandhub_model::FALLBACK_GRADIENT);
}
