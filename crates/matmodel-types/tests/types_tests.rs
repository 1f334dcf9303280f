//! Integration tests for matmodel-types.

use matmodel_types::{MatModelError, ModelCategory, ModelUuid};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn parse_hyphenated_uuid() {
    let id = ModelUuid::parse("454661e5-265b-4320-8e6f-fcf6223ac3af").unwrap();
    assert_eq!(id.to_string(), "454661e5-265b-4320-8e6f-fcf6223ac3af");
}

#[test]
fn parse_normalizes_case() {
    let id = ModelUuid::parse("454661E5-265B-4320-8E6F-FCF6223AC3AF").unwrap();
    assert_eq!(id.to_string(), "454661e5-265b-4320-8e6f-fcf6223ac3af");
}

#[test]
fn parse_rejects_empty() {
    let err = ModelUuid::parse("   ").unwrap_err();
    assert!(matches!(err, MatModelError::InvalidUuid(_)));
}

#[test]
fn parse_rejects_garbage() {
    assert!(ModelUuid::parse("not-a-uuid").is_err());
    assert!(ModelUuid::parse("454661e5-265b-4320-8e6f").is_err());
}

#[test]
fn from_str_matches_parse() {
    let a: ModelUuid = "1ae66d8c-1ba1-4211-ad12-b9917573b202".parse().unwrap();
    let b = ModelUuid::parse("1ae66d8c-1ba1-4211-ad12-b9917573b202").unwrap();
    assert_eq!(a, b);
    assert!(!a.is_nil());
}

#[test]
fn uuid_serializes_as_string() {
    let id = ModelUuid::parse("9959d007-a970-4ea7-bae4-3eb1b8b883c7").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"9959d007-a970-4ea7-bae4-3eb1b8b883c7\"");
    let back: ModelUuid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

// ─── Category Tests ───────────────────────────────────────────

#[test]
fn category_names_parse_back() {
    for &cat in ModelCategory::all() {
        let parsed: ModelCategory = cat.name().parse().unwrap();
        assert_eq!(parsed, cat);
    }
}

#[test]
fn category_parse_accepts_dashes() {
    let cat: ModelCategory = "Render-Engine".parse().unwrap();
    assert_eq!(cat, ModelCategory::RenderEngine);
}

#[test]
fn unknown_category_lists_available() {
    let err = "plastics".parse::<ModelCategory>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("plastics"));
    assert!(msg.contains("mechanical"));
}

#[test]
fn category_serde_is_snake_case() {
    let json = serde_json::to_string(&ModelCategory::RenderEngine).unwrap();
    assert_eq!(json, "\"render_engine\"");
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn unknown_model_display() {
    let err = MatModelError::unknown("Densty");
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Densty"));
}

#[test]
fn mismatch_display() {
    let err = MatModelError::Mismatch {
        name: "Fluid".into(),
        expected: "a".into(),
        found: "b".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Fluid"));
    assert!(!err.is_not_found());
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err: MatModelError = io.into();
    assert!(err.to_string().contains("file missing"));
}
