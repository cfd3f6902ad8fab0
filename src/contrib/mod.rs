//! Ready-made parsers for common lexical tokens.

pub mod parsers;

pub use parsers::{comma, decimal, identifier, integer, optional_sign, quoted_string};
