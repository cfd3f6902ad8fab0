use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, digit1, space0},
    combinator::{opt, recognize},
    multi::many0,
    branch::alt,
    sequence::{pair, preceded, tuple},
    IResult,
};

fn identifier(s: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(s)
}

fn statement(s: &str) -> IResult<&str, (Option<&str>, &str, &str)> {
    let (s, (_, mutable, name, _, value, _)) = tuple((
        preceded(space0, tag("let")),
        opt(preceded(space0, tag("mut"))),
        preceded(space0, identifier),
        preceded(space0, tag("=")),
        preceded(space0, digit1),
        preceded(space0, tag(";")),
    ))(s)?;
    Ok((s, (mutable, name, value)))
}

pub fn nom_parser(s: &str) -> Vec<String> {
    let (_, (mutable, name, value)) = statement(s).unwrap();
    vec![
        mutable.unwrap_or_default().to_string(),
        name.to_string(),
        value.to_string(),
    ]
}
