use once_cell::sync::Lazy;

use crate::prelude::Parser;

fn premade(name: &str, pattern: &str, optional: bool, discard: bool) -> Parser {
    Parser::with_flags(pattern, optional, discard)
        .expect("premade pattern is valid")
        .named(name)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn identifier() -> Parser {
    static P: Lazy<Parser> =
        Lazy::new(|| premade("identifier", "[A-Za-z_][A-Za-z0-9_]*", false, false));
    P.clone()
}

/// optionally signed run of decimal digits
pub fn integer() -> Parser {
    static P: Lazy<Parser> = Lazy::new(|| premade("integer", "[+-]?[0-9]+", false, false));
    P.clone()
}

/// an integer with an optional fractional part
pub fn decimal() -> Parser {
    static P: Lazy<Parser> =
        Lazy::new(|| premade("decimal", r"[+-]?[0-9]+(?:\.[0-9]+)?", false, false));
    P.clone()
}

/// double-quoted, backslash escapes allowed. The token keeps its quotes.
pub fn quoted_string() -> Parser {
    static P: Lazy<Parser> =
        Lazy::new(|| premade("quoted_string", r#""(?:[^"\\]|\\.)*""#, false, false));
    P.clone()
}

/// a `,` separator, consumed but not kept
pub fn comma() -> Parser {
    static P: Lazy<Parser> = Lazy::new(|| premade("comma", ",", false, true));
    P.clone()
}

/// `+` or `-` if present, else `""`
pub fn optional_sign() -> Parser {
    static P: Lazy<Parser> = Lazy::new(|| premade("optional_sign", "[+-]", true, false));
    P.clone()
}
