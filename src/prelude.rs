pub use crate::error::{Error, ParseError, PatternError};
pub use crate::parser::Parser;
pub use crate::token::TokenResult;

pub mod rc {
    pub use crate::contrib::parsers::*;
}
