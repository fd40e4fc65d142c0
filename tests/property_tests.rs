//! Property tests for the analyzer.
//!
//! These check cross-module invariants over generated calls: determinism,
//! robustness against arbitrary input and the exemptions of each rule.

use logcheck::{
    Analyzer, ArgExpr, CHARSET_MESSAGE, Callee, DecodedLiteral, LOWERCASE_MESSAGE, Pos,
    ReceiverType, ResolvedCall,
};
use proptest::prelude::*;

// Strategy: a quoted literal of arbitrary printable text
fn arb_literal() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -!#-\\[\\]-~é]{0,20}")
        .unwrap()
        .prop_map(|body| format!("\"{body}\""))
}

// Strategy: argument expressions including nested concatenations
fn arb_arg() -> impl Strategy<Value = ArgExpr> {
    let leaf = prop_oneof![
        (arb_literal(), 0usize..1000).prop_map(|(raw, pos)| ArgExpr::string(raw, Pos(pos))),
        ("[a-zA-Z_][a-zA-Z0-9_]{0,12}", 0usize..1000)
            .prop_map(|(name, pos)| ArgExpr::ident(name, Pos(pos))),
        ("[A-Z][a-zA-Z0-9]{0,12}", 0usize..1000)
            .prop_map(|(field, pos)| ArgExpr::field(field, Pos(pos))),
        Just(ArgExpr::Other),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), inner).prop_map(|(l, r)| ArgExpr::concat(l, r))
    })
}

// Strategy: callees, watched or not
fn arb_callee() -> impl Strategy<Value = Callee> {
    prop_oneof![
        prop_oneof![Just("Info"), Just("WarnContext"), Just("Log"), Just("Printf")]
            .prop_map(|name| Callee::function("log/slog", name)),
        prop_oneof![Just("Debug"), Just("Log"), Just("Sync")].prop_map(|name| Callee::method(
            "go.uber.org/zap",
            ReceiverType::pointer_to("Logger"),
            name
        )),
        Just(Callee::function("fmt", "Println")),
    ]
}

fn arb_call() -> impl Strategy<Value = ResolvedCall> {
    (arb_callee(), prop::collection::vec(arb_arg(), 0..5))
        .prop_map(|(callee, args)| ResolvedCall::new(callee, args, Pos(0)))
}

proptest! {
    /// Property: the same calls always yield the same diagnostics
    #[test]
    fn proptest_analysis_is_deterministic(calls in prop::collection::vec(arb_call(), 0..8)) {
        let analyzer = Analyzer::default();
        prop_assert_eq!(analyzer.run(&calls), analyzer.run(&calls));
    }

    /// Property: lowercase alphanumeric messages are always clean
    #[test]
    fn proptest_clean_messages_produce_no_format_diagnostics(
        body in "[a-z][a-z0-9 ]{0,30}",
        pos in 0usize..1000
    ) {
        let analyzer = Analyzer::default();
        let call = ResolvedCall::new(
            Callee::function("log/slog", "Info"),
            vec![ArgExpr::string(format!("\"{body}\""), Pos(pos))],
            Pos(0),
        );
        prop_assert!(analyzer.run([&call]).is_empty());
    }

    /// Property: a single literal yields at most one diagnostic per rule,
    /// always located inside the literal token
    #[test]
    fn proptest_format_diagnostics_stay_inside_the_literal(
        raw in arb_literal(),
        pos in 0usize..1000
    ) {
        let analyzer = Analyzer::default();
        let call = ResolvedCall::new(
            Callee::function("log/slog", "Info"),
            vec![ArgExpr::string(raw.clone(), Pos(pos))],
            Pos(0),
        );
        let diagnostics = analyzer.run([&call]);

        let casing = diagnostics.iter().filter(|d| d.message == LOWERCASE_MESSAGE).count();
        let charset = diagnostics.iter().filter(|d| d.message == CHARSET_MESSAGE).count();
        prop_assert!(casing <= 1 && charset <= 1);
        prop_assert_eq!(casing + charset, diagnostics.len());

        for diagnostic in &diagnostics {
            prop_assert!(diagnostic.pos.0 > pos && diagnostic.pos.0 < pos + raw.len() - 1);
        }
    }

    /// Property: decoding never panics, whatever the token
    #[test]
    fn proptest_decoding_arbitrary_tokens_never_panics(token in "\\PC{0,24}") {
        let _ = DecodedLiteral::decode(&token);
        let _ = DecodedLiteral::decode(&format!("\"{token}\""));
    }
}
