use derp_move::LogLevel;

#[test]
fn parses_canonical_names() {
    assert_eq!(LogLevel::parse("quiet"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("normal"), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
}

#[test]
fn parses_aliases_case_insensitively() {
    assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("none"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("Verbose"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("TRACE"), Some(LogLevel::Debug));
}

#[test]
fn rejects_unknown_names() {
    assert_eq!(LogLevel::parse("loud"), None);
    let err = "loud".parse::<LogLevel>().unwrap_err();
    assert!(err.contains("invalid log level"));
}

#[test]
fn display_round_trips_through_parse() {
    for lvl in [
        LogLevel::Quiet,
        LogLevel::Normal,
        LogLevel::Info,
        LogLevel::Debug,
    ] {
        assert_eq!(LogLevel::parse(&lvl.to_string()), Some(lvl));
    }
}
