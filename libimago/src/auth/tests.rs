use super::*;

#[test]
fn test_empty_credentials() {
    let creds = Credentials::new();
    assert!(creds.github_token().is_none());
    assert!(creds.codeberg_token().is_none());
}

#[test]
fn test_builder_sets_tokens() {
    let creds = Credentials::new()
        .with_github_token("ghp_abc123")
        .with_codeberg_token("cb_def456");
    assert_eq!(creds.github_token(), Some("ghp_abc123"));
    assert_eq!(creds.codeberg_token(), Some("cb_def456"));
}

#[test]
fn test_debug_redacts_token_values() {
    let creds = Credentials::new().with_github_token("ghp_secret_value");
    let debugged = format!("{:?}", creds);
    assert!(!debugged.contains("ghp_secret_value"));
    assert!(debugged.contains("<redacted>"));
}

#[test]
fn test_debug_shows_absent_tokens_as_none() {
    let creds = Credentials::new();
    let debugged = format!("{:?}", creds);
    assert!(debugged.contains("None"));
}
