use super::*;
use std::io::Write;

#[test]
fn test_build_with_explicit_settings_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "network:\n  concurrency: 3").unwrap();

    let ctx = AppContext::build(
        Some(file.path()),
        ColorChoice::Never,
        Some("gh_token".to_string()),
        None,
    );

    assert_eq!(ctx.settings.network.concurrency, 3);
    assert_eq!(ctx.credentials.github_token(), Some("gh_token"));
    assert!(ctx.credentials.codeberg_token().is_none());
}

#[test]
fn test_build_with_missing_settings_file_uses_defaults() {
    let ctx = AppContext::build(
        Some(Path::new("/no/such/settings.yaml")),
        ColorChoice::Never,
        None,
        None,
    );

    assert_eq!(ctx.settings, Settings::default());
    assert!(ctx.credentials.github_token().is_none());
}

#[test]
fn test_build_sets_both_tokens() {
    let ctx = AppContext::build(
        Some(Path::new("/no/such/settings.yaml")),
        ColorChoice::Never,
        Some("gh".to_string()),
        Some("cb".to_string()),
    );

    assert_eq!(ctx.credentials.github_token(), Some("gh"));
    assert_eq!(ctx.credentials.codeberg_token(), Some("cb"));
}
