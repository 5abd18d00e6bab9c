//! Canonical function identities and surface-name resolution
//!
//! The `builtin_functions!` invocation below is the authoritative catalog:
//! it expands to the [`BuiltinFunction`] enum, the ordered
//! [`BuiltinFunction::ALL`] listing, and the surface-name mapping, so the
//! three cannot drift apart. The reverse index is derived from it once,
//! on first lookup.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! builtin_functions {
    ($($(#[$meta:meta])* $variant:ident => $surface:literal,)+) => {
        /// Canonical identifier for a function or operator the compiler
        /// recognizes natively, independent of surface spelling.
        ///
        /// The set is closed: matches over it are exhaustive, so adding a
        /// function forces every consumer site to acknowledge it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum BuiltinFunction {
            $($(#[$meta])* $variant,)+
        }

        impl BuiltinFunction {
            /// Every builtin, in catalog order.
            pub const ALL: &'static [BuiltinFunction] =
                &[$(BuiltinFunction::$variant,)+];

            /// The canonical surface spelling of this function.
            pub fn surface_name(self) -> &'static str {
                match self {
                    $(BuiltinFunction::$variant => $surface,)+
                }
            }
        }
    };
}

builtin_functions! {
    // Mathematical functions
    Abs => "abs",
    Ceil => "ceil",
    Ceiling => "ceiling",
    Conv => "conv",
    Crc32 => "crc32",
    E => "e",
    Exp => "exp",
    Floor => "floor",
    Ln => "ln",
    Log => "log",
    Log10 => "log10",
    Log2 => "log2",
    Mod => "mod",
    Pi => "pi",
    Pow => "pow",
    Power => "power",
    Rand => "rand",
    Round => "round",
    Sign => "sign",
    Sqrt => "sqrt",
    Truncate => "truncate",

    // Trigonometry
    Acos => "acos",
    Asin => "asin",
    Atan => "atan",
    Atan2 => "atan2",
    Cos => "cos",
    Cot => "cot",
    Degrees => "degrees",
    Radians => "radians",
    Sin => "sin",
    Tan => "tan",

    // Date and time functions
    AddDate => "adddate",
    Date => "date",
    DateAdd => "date_add",
    DateSub => "date_sub",
    Day => "day",
    DayName => "dayname",
    DayOfMonth => "dayofmonth",
    DayOfWeek => "dayofweek",
    DayOfYear => "dayofyear",
    FromDays => "from_days",
    Hour => "hour",
    Microsecond => "microsecond",
    Minute => "minute",
    Month => "month",
    MonthName => "monthname",
    Quarter => "quarter",
    Second => "second",
    SubDate => "subdate",
    Time => "time",
    TimeToSec => "time_to_sec",
    Timestamp => "timestamp",
    DateFormat => "date_format",
    ToDays => "to_days",
    Week => "week",
    Year => "year",

    // Conversion
    ToString => "tostring",

    // Arithmetic operators
    Add => "+",
    Subtract => "-",
    Multiply => "*",
    Divide => "/",
    Modulo => "%",

    // Boolean operators
    And => "and",
    Or => "or",
    Xor => "xor",
    Not => "not",
    Equal => "=",
    NotEqual => "!=",
    Less => "<",
    Lte => "<=",
    Greater => ">",
    Gte => ">=",
    Like => "like",
    NotLike => "not like",

    // Aggregation functions
    Avg => "avg",
    Sum => "sum",
    Count => "count",
    Min => "min",
    Max => "max",
    /// Sample variance.
    VarSamp => "var_samp",
    /// Population variance.
    VarPop => "var_pop",
    /// Sample standard deviation.
    StddevSamp => "stddev_samp",
    /// Population standard deviation.
    StddevPop => "stddev_pop",

    // Text functions
    Substr => "substr",
    Substring => "substring",
    Rtrim => "rtrim",
    Ltrim => "ltrim",
    Trim => "trim",
    Upper => "upper",
    Lower => "lower",
    Regexp => "regexp",
    Concat => "concat",
    ConcatWs => "concat_ws",
    Length => "length",
    Strcmp => "strcmp",
    Right => "right",
    Left => "left",
    Ascii => "ascii",
    Locate => "locate",
    Replace => "replace",

    // NULL tests and conditionals
    IsNull => "is null",
    IsNotNull => "is not null",
    IfNull => "ifnull",
    If => "if",
    NullIf => "nullif",
    /// Legacy single-argument null test, the `isnull(expr)` function form.
    Isnull => "isnull",

    // Window / ranking
    RowNumber => "row_number",
    Rank => "rank",
    DenseRank => "dense_rank",

    Interval => "interval",

    // Type cast functions
    CastToString => "cast_to_string",
    CastToByte => "cast_to_byte",
    CastToShort => "cast_to_short",
    CastToInt => "cast_to_int",
    CastToLong => "cast_to_long",
    CastToFloat => "cast_to_float",
    CastToDouble => "cast_to_double",
    CastToBoolean => "cast_to_boolean",
    CastToDate => "cast_to_date",
    CastToTime => "cast_to_time",
    CastToTimestamp => "cast_to_timestamp",
    CastToDatetime => "cast_to_datetime",

    // Relevance functions (search backend)
    Match => "match",
    SimpleQueryString => "simple_query_string",
    MatchPhrase => "match_phrase",
    /// Legacy spelling of [`BuiltinFunction::MatchPhrase`].
    Matchphrase => "matchphrase",
    QueryString => "query_string",
    MatchBoolPrefix => "match_bool_prefix",
    Highlight => "highlight",
    MatchPhrasePrefix => "match_phrase_prefix",

    // Legacy relevance functions
    Query => "query",
    MatchQuery => "match_query",
    /// Legacy spelling of [`BuiltinFunction::MatchQuery`].
    Matchquery => "matchquery",
    MultiMatch => "multi_match",
}

/// Surface name -> identifier, built once from the catalog.
///
/// Construction asserts injectivity: two identifiers sharing a spelling
/// is a catalog defect and halts initialization rather than resolving
/// by insertion order.
static NAME_INDEX: Lazy<HashMap<&'static str, BuiltinFunction>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(BuiltinFunction::ALL.len());
    for &func in BuiltinFunction::ALL {
        let previous = index.insert(func.surface_name(), func);
        assert!(
            previous.is_none(),
            "duplicate surface name {:?} in builtin catalog",
            func.surface_name()
        );
    }
    tracing::debug!(functions = index.len(), "built builtin function name index");
    index
});

impl BuiltinFunction {
    /// Resolves a surface-syntax token to its canonical identifier.
    ///
    /// Matching is exact: callers with case-insensitive syntax fold case
    /// before lookup. `None` is the common outcome, since most tokens in
    /// a query are column or table identifiers rather than function names.
    pub fn resolve(token: &str) -> Option<BuiltinFunction> {
        NAME_INDEX.get(token).copied()
    }

    /// Whether this function is valid in aggregate/group-by contexts.
    pub fn is_aggregation(self) -> bool {
        matches!(
            self,
            BuiltinFunction::Avg
                | BuiltinFunction::Sum
                | BuiltinFunction::Count
                | BuiltinFunction::Min
                | BuiltinFunction::Max
                | BuiltinFunction::VarSamp
                | BuiltinFunction::VarPop
                | BuiltinFunction::StddevSamp
                | BuiltinFunction::StddevPop
        )
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.surface_name())
    }
}

/// Error from the strict-parse path for tokens that are not builtin
/// surface names. [`BuiltinFunction::resolve`] is the `Option` form:
/// absence there is a normal value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a builtin function: {0}")]
pub struct UnknownFunction(pub String);

impl FromStr for BuiltinFunction {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinFunction::resolve(s).ok_or_else(|| UnknownFunction(s.to_string()))
    }
}
