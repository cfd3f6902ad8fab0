use std::str::FromStr;

use crate::prelude::*;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => FancyColor::VARIANTS
//   derive(EnumString) + trait FromStr => FancyColor::from_str
// the variant names become an alternation pattern, and the matched token
// converts back with FromStr
//

#[derive(PartialEq, Debug, EnumVariantNames, EnumString)]
pub enum FancyColor {
    Burgundy,
    Azure,
    Lime,
}

/// `\b` stops "Lime" matching the front of "Limelight"
pub fn color() -> Result<Parser, PatternError> {
    Ok(Parser::new(&format!(r"(?:{})\b", FancyColor::VARIANTS.join("|")))?.named("color"))
}

pub fn parse_fancy_enum(s: &str) -> Result<(usize, FancyColor), Error> {
    let (end, tokens) = color()?.parse(s)?.into_parts();
    let token = tokens.first().map(String::as_str).unwrap_or_default();
    Ok((end, to_color(token, end)?))
}

/// `token` ended at `end`, a mismatch is reported where the token started
fn to_color(token: &str, end: usize) -> Result<FancyColor, ParseError> {
    FancyColor::from_str(token).map_err(|_| ParseError::new(end.saturating_sub(token.len()), "color"))
}
