use crate::prelude::*;

/// `let <name> = <integer>;` with optional `mut`.
///
/// Keywords and punctuation are discarded, so the tokens are exactly
/// `[mut-or-empty, name, value]`.
pub fn let_statement() -> Result<Parser, PatternError> {
    let keyword = Parser::with_flags("let", false, true)?;
    let mutable = Parser::with_flags("mut", true, false)?.named("mut");
    let name = rc::identifier();
    let equals = Parser::with_flags("=", false, true)?.named("equals");
    let value = rc::integer();
    let semi = Parser::with_flags(";", false, true)?.named("semicolon");
    Ok(keyword.and(&mutable).and(&name).and(&equals).and(&value).and(&semi))
}

/// Like [`let_statement`] but the trailing `;` may be left off.
pub fn relaxed_let_statement() -> Result<Parser, PatternError> {
    let keyword = Parser::with_flags("let", false, true)?;
    let mutable = Parser::with_flags("mut", true, true)?;
    let equals = Parser::with_flags("=", false, true)?;
    let semi = Parser::with_flags(";", true, true)?;
    Ok(keyword
        .and(&mutable)
        .and(&rc::identifier())
        .and(&equals)
        .and(&rc::integer())
        .and(&semi))
}
