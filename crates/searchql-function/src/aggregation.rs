//! Aggregation alias resolution
//!
//! Dialect and legacy spellings of the aggregate functions, hand-curated
//! rather than derived from the catalog: the alias set is richer than the
//! 1:1 catalog names ("std", "stddev", and "stddev_pop" all mean the
//! population standard deviation). Unqualified "variance" and "std"
//! resolve to the population variants.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::builtin::BuiltinFunction;

/// Lower-cased alias -> canonical aggregation identifier.
///
/// Construction asserts every target is aggregation-capable; an alias
/// pointing elsewhere is a table defect and halts initialization.
static AGGREGATION_ALIASES: Lazy<HashMap<&'static str, BuiltinFunction>> = Lazy::new(|| {
    let aliases = HashMap::from([
        ("max", BuiltinFunction::Max),
        ("min", BuiltinFunction::Min),
        ("avg", BuiltinFunction::Avg),
        ("count", BuiltinFunction::Count),
        ("sum", BuiltinFunction::Sum),
        ("var_pop", BuiltinFunction::VarPop),
        ("var_samp", BuiltinFunction::VarSamp),
        ("variance", BuiltinFunction::VarPop),
        ("std", BuiltinFunction::StddevPop),
        ("stddev", BuiltinFunction::StddevPop),
        ("stddev_pop", BuiltinFunction::StddevPop),
        ("stddev_samp", BuiltinFunction::StddevSamp),
    ]);
    for target in aliases.values() {
        assert!(
            target.is_aggregation(),
            "aggregation alias target {target:?} is not aggregation-capable"
        );
    }
    tracing::debug!(aliases = aliases.len(), "built aggregation alias index");
    aliases
});

impl BuiltinFunction {
    /// Resolves an aggregation-function alias to its canonical identifier.
    ///
    /// Case-insensitive, unlike [`BuiltinFunction::resolve`]: the token is
    /// lower-cased (locale-independent) before matching, so `"AVG"`,
    /// `"Avg"`, and `"avg"` resolve identically. Aliases are many-to-one:
    /// `"variance"` and `"var_pop"` both name the population variance.
    pub fn resolve_aggregation(token: &str) -> Option<BuiltinFunction> {
        AGGREGATION_ALIASES.get(token.to_lowercase().as_str()).copied()
    }
}
