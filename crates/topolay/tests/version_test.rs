#[test]
fn version_matches_manifest() {
    assert_eq!(topolay::VERSION, env!("CARGO_PKG_VERSION"));
}
