//! Integration tests for matmodel-registry.

use std::collections::HashSet;

use matmodel_registry::{uuids, ModelKind, ModelUuids};
use matmodel_types::{MatModelError, ModelCategory, ModelUuid};

// ─── Lookup Tests ─────────────────────────────────────────────

#[test]
fn lookup_by_name() {
    let reg = ModelUuids::global();
    assert_eq!(reg.get("Density").unwrap(), uuids::DENSITY);
    assert_eq!(reg.get("Fluid").unwrap(), uuids::FLUID);
    assert_eq!(reg.get("RenderCycles").unwrap(), uuids::RENDER_CYCLES);
}

#[test]
fn every_name_resolves_to_a_valid_uuid() {
    let reg = ModelUuids::global();
    for name in reg.names() {
        let value = reg.get(name).unwrap();
        assert!(!value.is_empty(), "{name} maps to an empty string");
        let parsed = ModelUuid::parse(value).unwrap();
        // Stored form is already canonical.
        assert_eq!(parsed.to_string(), value, "{name} is not lowercase hyphenated");
    }
}

#[test]
fn uuids_are_pairwise_distinct() {
    let reg = ModelUuids::global();
    let mut seen = HashSet::new();
    for (kind, value) in reg.iter() {
        assert!(seen.insert(value), "{kind} reuses UUID {value}");
    }
    assert_eq!(seen.len(), reg.len());
}

#[test]
fn names_are_unique() {
    let names = ModelUuids::global().names();
    let set: HashSet<_> = names.iter().collect();
    assert_eq!(set.len(), names.len());
}

#[test]
fn unknown_name_is_not_found() {
    let err = ModelUuids::global().get("Unobtainium").unwrap_err();
    assert!(err.is_not_found());
    match err {
        MatModelError::UnknownModel { name } => assert_eq!(name, "Unobtainium"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lookup_is_case_sensitive() {
    let reg = ModelUuids::global();
    assert!(reg.get("density").is_err());
    assert!(reg.get("").is_err());
    assert!(!reg.contains("DENSITY"));
}

#[test]
fn repeated_lookups_are_stable() {
    let first = ModelUuids::global().get("LinearElastic").unwrap();
    for _ in 0..10 {
        assert_eq!(ModelUuids::global().get("LinearElastic").unwrap(), first);
    }
    // A freshly built table agrees with the global one.
    assert_eq!(ModelUuids::builtin().get("LinearElastic").unwrap(), first);
}

#[test]
fn global_is_shared() {
    let a = ModelUuids::global() as *const ModelUuids;
    let b = ModelUuids::global() as *const ModelUuids;
    assert_eq!(a, b);
}

#[test]
fn concurrent_reads_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let reg = ModelUuids::global();
                reg.names()
                    .into_iter()
                    .map(|n| reg.get(n).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
}

#[test]
fn doc_and_kind_lookup() {
    let reg = ModelUuids::global();
    assert_eq!(reg.kind("Thermal").unwrap(), ModelKind::Thermal);
    assert!(reg.doc("Thermal").unwrap().contains("conductivity"));
    assert!(reg.doc("Nope").is_err());
}

#[test]
fn get_uuid_parses() {
    let id = ModelUuids::global().get_uuid("Costs").unwrap();
    assert_eq!(id.to_string(), uuids::COSTS);
}

// ─── Reverse Lookup Tests ─────────────────────────────────────

#[test]
fn find_by_uuid_round_trips_every_model() {
    let reg = ModelUuids::global();
    for &kind in ModelKind::ALL {
        assert_eq!(reg.find_by_uuid(kind.uuid_str()), Some(kind));
    }
}

#[test]
fn find_by_uuid_ignores_case_and_braces() {
    let reg = ModelUuids::global();
    let upper = uuids::RENDER_CYCLES.to_ascii_uppercase();
    assert_eq!(reg.find_by_uuid(&upper), Some(ModelKind::RenderCycles));
    let braced = format!("{{{}}}", uuids::DENSITY);
    assert_eq!(reg.find_by_uuid(&braced), Some(ModelKind::Density));
}

#[test]
fn find_by_uuid_misses() {
    let reg = ModelUuids::global();
    assert_eq!(reg.find_by_uuid("00000000-0000-0000-0000-000000000000"), None);
    assert_eq!(reg.find_by_uuid("Density"), None);
}

// ─── Enumeration Tests ────────────────────────────────────────

#[test]
fn registry_covers_every_kind() {
    let reg = ModelUuids::global();
    assert_eq!(reg.len(), ModelKind::ALL.len());
    assert_eq!(reg.len(), 44);
    assert!(!reg.is_empty());
}

#[test]
fn names_follow_declaration_order() {
    let names = ModelUuids::global().names();
    assert_eq!(names.first(), Some(&"Father"));
    assert_eq!(names.last(), Some(&"TestMaterial"));
}

#[test]
fn categories_partition_the_registry() {
    let reg = ModelUuids::global();
    let total: usize = ModelCategory::all()
        .iter()
        .map(|&c| reg.by_category(c).len())
        .sum();
    assert_eq!(total, reg.len());
    assert_eq!(reg.by_category(ModelCategory::Fluid), vec![ModelKind::Fluid]);
    assert_eq!(reg.by_category(ModelCategory::RenderEngine).len(), 16);
}

#[test]
fn kind_parses_from_name() {
    let kind: ModelKind = "OrthotropicLinearElastic".parse().unwrap();
    assert_eq!(kind, ModelKind::OrthotropicLinearElastic);
    assert_eq!(kind.to_string(), "OrthotropicLinearElastic");
    assert!("Orthotropic".parse::<ModelKind>().is_err());
}

#[test]
fn suggestions_for_typos() {
    let reg = ModelUuids::global();
    let hits = reg.suggestions("ogden");
    assert!(hits.contains(&"OgdenN1"));
    assert!(hits.contains(&"OgdenYld2004p18"));
    // Exact names match themselves regardless of case.
    assert_eq!(reg.suggestions("FLUID"), vec!["Fluid"]);
    assert!(reg.suggestions("").is_empty());
    assert!(reg.suggestions("zzz").is_empty());
}
