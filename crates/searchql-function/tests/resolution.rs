//! Registry-wide resolution properties: catalog integrity, round trips,
//! and the alias table's relationship to the catalog.

use std::collections::HashMap;

use searchql_function::BuiltinFunction;

/// The full alias surface, as accepted by the aggregation-clause binder.
const AGGREGATION_ALIASES: &[&str] = &[
    "max",
    "min",
    "avg",
    "count",
    "sum",
    "var_pop",
    "var_samp",
    "variance",
    "std",
    "stddev",
    "stddev_pop",
    "stddev_samp",
];

#[test]
fn test_surface_names_are_injective() {
    let mut seen: HashMap<&str, BuiltinFunction> = HashMap::new();
    for &func in BuiltinFunction::ALL {
        if let Some(existing) = seen.insert(func.surface_name(), func) {
            panic!(
                "{existing:?} and {func:?} share surface name {:?}",
                func.surface_name()
            );
        }
    }
}

#[test]
fn test_resolve_round_trips_every_builtin() {
    for &func in BuiltinFunction::ALL {
        assert_eq!(BuiltinFunction::resolve(func.surface_name()), Some(func));
    }
}

#[test]
fn test_resolve_is_exact_match() {
    // general resolution does not fold case; that is the alias path's job
    assert_eq!(BuiltinFunction::resolve("AVG"), None);
    assert_eq!(BuiltinFunction::resolve("avg"), Some(BuiltinFunction::Avg));
    assert_eq!(BuiltinFunction::resolve("Is Not Null"), None);
}

#[test]
fn test_resolve_ordinary_identifiers_absent() {
    assert_eq!(BuiltinFunction::resolve("customer_id"), None);
    assert_eq!(BuiltinFunction::resolve("unknown_fn_xyz"), None);
}

#[test]
fn test_resolve_operator_spellings() {
    assert_eq!(BuiltinFunction::resolve("+"), Some(BuiltinFunction::Add));
    assert_eq!(BuiltinFunction::resolve("!="), Some(BuiltinFunction::NotEqual));
    assert_eq!(
        BuiltinFunction::resolve("is not null"),
        Some(BuiltinFunction::IsNotNull)
    );
    assert_eq!(
        BuiltinFunction::resolve("not like"),
        Some(BuiltinFunction::NotLike)
    );
}

#[test]
fn test_aggregation_alias_case_insensitive() {
    let lower = BuiltinFunction::resolve_aggregation("avg");
    assert_eq!(lower, Some(BuiltinFunction::Avg));
    assert_eq!(BuiltinFunction::resolve_aggregation("AVG"), lower);
    assert_eq!(BuiltinFunction::resolve_aggregation("Avg"), lower);
}

#[test]
fn test_aggregation_aliases_are_many_to_one() {
    assert_eq!(
        BuiltinFunction::resolve_aggregation("variance"),
        Some(BuiltinFunction::VarPop)
    );
    assert_eq!(
        BuiltinFunction::resolve_aggregation("var_pop"),
        Some(BuiltinFunction::VarPop)
    );
    for alias in ["std", "stddev", "stddev_pop"] {
        assert_eq!(
            BuiltinFunction::resolve_aggregation(alias),
            Some(BuiltinFunction::StddevPop),
            "alias {alias:?}"
        );
    }
    assert_eq!(
        BuiltinFunction::resolve_aggregation("stddev_samp"),
        Some(BuiltinFunction::StddevSamp)
    );
}

#[test]
fn test_every_alias_targets_an_aggregation() {
    for alias in AGGREGATION_ALIASES {
        let target = BuiltinFunction::resolve_aggregation(alias)
            .unwrap_or_else(|| panic!("alias {alias:?} no longer resolves"));
        assert!(
            target.is_aggregation(),
            "alias {alias:?} resolves to non-aggregation {target:?}"
        );
    }
}

#[test]
fn test_unknown_aggregation_alias_absent() {
    assert_eq!(BuiltinFunction::resolve_aggregation("median"), None);
    // canonical catalog names outside the alias table do not resolve here
    assert_eq!(BuiltinFunction::resolve_aggregation("match_phrase"), None);
}

#[test]
fn test_surface_name_rendering() {
    assert_eq!(BuiltinFunction::MatchPhrase.surface_name(), "match_phrase");
    assert_eq!(BuiltinFunction::Modulo.surface_name(), "%");
    assert_eq!(format!("unknown function: {}", BuiltinFunction::IsNull), "unknown function: is null");
}

#[test]
fn test_strict_parse_round_trip() {
    assert_eq!("match_phrase".parse(), Ok(BuiltinFunction::MatchPhrase));
    assert!("match phrase".parse::<BuiltinFunction>().is_err());
}

#[test]
fn test_identifier_serialization_is_stable() {
    // identifiers appear in cached plans; the wire form is the variant name
    let json = serde_json::to_string(&BuiltinFunction::VarPop).unwrap();
    assert_eq!(json, "\"VarPop\"");
    let parsed: BuiltinFunction = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, BuiltinFunction::VarPop);
}

#[test]
fn test_concurrent_first_lookup() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| BuiltinFunction::resolve("avg")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(BuiltinFunction::Avg));
    }
}
