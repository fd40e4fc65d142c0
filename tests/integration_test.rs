use logcheck::{
    Analyzer, ArgExpr, CHARSET_MESSAGE, Callee, Diagnostic, DiagnosticTrail, LOWERCASE_MESSAGE,
    Pos, RawConfig, ReceiverType, Reporter, ResolvedCall, sensitive_leak_message,
};
use serde_json::json;

fn lit(raw: &str, pos: usize) -> ArgExpr {
    ArgExpr::string(raw, Pos(pos))
}

fn zap_logger(method: &str, args: Vec<ArgExpr>) -> ResolvedCall {
    ResolvedCall::new(
        Callee::method("go.uber.org/zap", ReceiverType::pointer_to("Logger"), method),
        args,
        Pos(0),
    )
}

#[test]
fn registry_override_watches_new_package_and_keeps_defaults() {
    let analyzer = Analyzer::from_settings(&json!({
        "watched-logs": r#"{"mypkg":{"functions":{"Warnf":0}}}"#,
    }));

    let custom = ResolvedCall::new(
        Callee::function("mypkg", "Warnf"),
        vec![lit("\"Bad msg\"", 40)],
        Pos(30),
    );
    let diagnostics = analyzer.run([&custom]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, LOWERCASE_MESSAGE);
    assert_eq!(diagnostics[0].pos, Pos(41));

    let slog = ResolvedCall::new(
        Callee::function("log/slog", "Info"),
        vec![lit("\"Still watched\"", 0)],
        Pos(0),
    );
    assert_eq!(analyzer.run([&slog]).len(), 1);
}

#[test]
fn malformed_override_is_silently_ignored() {
    let analyzer = Analyzer::from_settings(&json!({ "watched-logs": "{not json" }));
    let call = ResolvedCall::new(
        Callee::function("log/slog", "Error"),
        vec![lit("\"Boom\"", 0)],
        Pos(0),
    );
    assert_eq!(analyzer.run([&call]).len(), 1);
}

#[test]
fn field_access_leak_is_reported_at_the_field() {
    let analyzer = Analyzer::default();
    // l.Debug("auth", u.Token)
    let call = zap_logger("Debug", vec![lit("\"auth\"", 8), ArgExpr::field("Token", Pos(18))]);

    assert_eq!(
        analyzer.run([&call]),
        vec![Diagnostic::new(Pos(18), sensitive_leak_message("token"))]
    );
}

#[test]
fn literal_mention_of_keyword_is_safe() {
    let analyzer = Analyzer::default();
    let call = zap_logger("Info", vec![lit("\"token validated\"", 0)]);
    assert!(analyzer.run([&call]).is_empty());
}

#[test]
fn custom_keywords_replace_the_defaults() {
    let analyzer = Analyzer::from_settings(&json!({ "sensitive-keywords": "ssn, pin" }));
    let call = zap_logger(
        "Warn",
        vec![
            lit("\"user lookup\"", 0),
            ArgExpr::ident("password", Pos(20)),
            ArgExpr::ident("userSSN", Pos(30)),
        ],
    );

    assert_eq!(
        analyzer.run([&call]),
        vec![Diagnostic::new(Pos(34), sensitive_leak_message("ssn"))]
    );
}

#[test]
fn unwatched_calls_produce_nothing() {
    let analyzer = Analyzer::default();
    let calls = [
        ResolvedCall::new(
            Callee::function("fmt", "Printf"),
            vec![lit("\"Bad %s!\"", 0), ArgExpr::ident("password", Pos(12))],
            Pos(0),
        ),
        ResolvedCall::unresolved(vec![lit("\"Bad!\"", 0)], Pos(0)),
    ];
    assert!(analyzer.run(&calls).is_empty());
}

#[test]
fn missing_message_argument_is_ignored() {
    let analyzer = Analyzer::default();
    let call = zap_logger("Log", vec![ArgExpr::ident("level", Pos(0))]);
    assert!(analyzer.run([&call]).is_empty());
}

#[test]
fn diagnostics_follow_call_then_argument_order() {
    let analyzer = Analyzer::default();
    let first = ResolvedCall::new(
        Callee::function("log/slog", "Warn"),
        vec![
            ArgExpr::concat(lit("\"Retry\"", 10), lit("\"in 5s!\"", 20)),
            ArgExpr::ident("secret", Pos(30)),
        ],
        Pos(0),
    );
    let second = zap_logger("Error", vec![lit("\"x_y\"", 100)]);

    let messages: Vec<(Pos, String)> = analyzer
        .run([&first, &second])
        .into_iter()
        .map(|d| (d.pos, d.message))
        .collect();

    assert_eq!(
        messages,
        vec![
            (Pos(11), LOWERCASE_MESSAGE.to_string()),
            (Pos(26), CHARSET_MESSAGE.to_string()),
            (Pos(30), sensitive_leak_message("secret")),
            (Pos(102), CHARSET_MESSAGE.to_string()),
        ]
    );
}

#[test]
fn running_twice_gives_identical_results() {
    let analyzer = Analyzer::default();
    let calls = vec![
        zap_logger("Info", vec![lit("\"Hello!\"", 0), ArgExpr::ident("apiKey", Pos(10))]),
        zap_logger("Debug", vec![lit("\"fine\"", 20)]),
    ];
    assert_eq!(analyzer.run(&calls), analyzer.run(&calls));
}

#[test]
fn reporter_receives_diagnostics_as_they_are_found() {
    struct Counting(std::cell::Cell<usize>);
    impl Reporter for Counting {
        fn report(&self, _diagnostic: Diagnostic) {
            self.0.set(self.0.get() + 1);
        }
    }

    let analyzer = Analyzer::default();
    let call = zap_logger("Info", vec![lit("\"Hi!\"", 0)]);

    let counting = Counting(std::cell::Cell::new(0));
    analyzer.run_with([&call], &counting);
    assert_eq!(counting.0.get(), 2);

    let trail = DiagnosticTrail::new();
    analyzer.check_call(&call, &trail);
    assert_eq!(trail.len(), 2);
}

#[test]
fn shared_analyzer_across_threads_sees_one_configuration() {
    let analyzer = Analyzer::from_settings(&json!({ "sensitive-keywords": "hunter" }));
    let call = zap_logger("Info", vec![lit("\"ok\"", 0), ArgExpr::ident("hunter2", Pos(5))]);

    let results: Vec<Vec<Diagnostic>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| analyzer.run([&call]))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for diagnostics in &results {
        assert_eq!(diagnostics, &vec![Diagnostic::new(Pos(5), sensitive_leak_message("hunter"))]);
    }
}

#[test]
fn analysis_logs_through_tracing() {
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish(),
    );

    let analyzer = Analyzer::new(RawConfig {
        watched_logs: "[1, 2]".to_string(),
        ..RawConfig::default()
    });
    let call = ResolvedCall::new(
        Callee::function("log/slog", "Info"),
        vec![lit(r#""bad \z escape""#, 0)],
        Pos(0),
    );
    assert!(analyzer.run([&call]).is_empty());
}
