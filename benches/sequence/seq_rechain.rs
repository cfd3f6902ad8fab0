use rechain::prelude::*;

pub struct RechainParser {
    statement: Parser,
}

impl RechainParser {
    pub fn new() -> Self {
        let kw = |s: &str| Parser::with_flags(s, false, true).unwrap();
        let statement = kw("let")
            .and(&Parser::with_flags("mut", true, false).unwrap())
            .and(&rc::identifier())
            .and(&kw("="))
            .and(&rc::integer())
            .and(&kw(";"));
        Self { statement }
    }

    pub fn parse(&self, s: &str) -> Vec<String> {
        self.statement.parse(s).unwrap().into_parts().1
    }
}
