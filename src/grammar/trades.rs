use super::{Grammar, Symbol};

fn n(name: &str) -> Symbol {
    Symbol::NonTerminal(name.to_string())
}

fn t(name: &str) -> Symbol {
    Symbol::Terminal(name.to_string())
}

/// A grammar of lists of trades between three people.
///
/// ```text
/// rules  -> trade | rules trade
/// trade  -> "Trade(" person "," person "," xvalue "," yvalue ")"
/// person -> "Alice" | "Bob" | "Charles"
/// xvalue -> "Xvalue(" number ")"
/// yvalue -> "Yvalue(" number ")"
/// number -> NUMBER
/// ```
///
/// One trade takes eight codons.
pub fn trades() -> Grammar {
    Grammar::builder()
        .start("rules")
        .rule("rules", vec![n("trade")])
        .rule("rules", vec![n("rules"), n("trade")])
        .rule("trade", vec![
            t("TRADE"), n("person"), t("COMMA"), n("person"), t("COMMA"),
            n("xvalue"), t("COMMA"), n("yvalue"), t("RPAR"),
        ])
        .rule("person", vec![t("ALICE")])
        .rule("person", vec![t("BOB")])
        .rule("person", vec![t("CHARLES")])
        .rule("xvalue", vec![t("XVALUE"), n("number"), t("RPAR")])
        .rule("yvalue", vec![t("YVALUE"), n("number"), t("RPAR")])
        .rule("number", vec![t("NUMBER")])
        .terminal("TRADE", "Trade(")
        .terminal("COMMA", ",")
        .terminal("RPAR", ")")
        .terminal("ALICE", "Alice")
        .terminal("BOB", "Bob")
        .terminal("CHARLES", "Charles")
        .terminal("XVALUE", "Xvalue(")
        .terminal("YVALUE", "Yvalue(")
        .terminal("NUMBER", "NUMBER")
        .build()
}
