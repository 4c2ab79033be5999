use super::*;
use crate::availability::Availability;

fn test_client() -> Client {
    Client::new().unwrap()
}

// Routing

#[test]
fn test_routing_ghcr_prefix() {
    assert_eq!(RegistryKind::for_registry("ghcr.io"), RegistryKind::Ghcr);
}

#[test]
fn test_routing_codeberg_prefix() {
    assert_eq!(
        RegistryKind::for_registry("codeberg.org"),
        RegistryKind::Codeberg
    );
}

#[test]
fn test_routing_defaults_to_docker_hub() {
    assert_eq!(
        RegistryKind::for_registry("docker.io"),
        RegistryKind::DockerHub
    );
    assert_eq!(
        RegistryKind::for_registry("registry.example.com"),
        RegistryKind::DockerHub
    );
    assert_eq!(RegistryKind::for_registry(""), RegistryKind::DockerHub);
}

// Docker Hub adapter

#[tokio::test]
async fn test_docker_hub_available_with_timestamp() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/library/ubuntu/tags/20.04")
        .with_status(200)
        .with_body(r#"{"name":"20.04","last_updated":"2024-01-15T10:30:00.000000Z"}"#)
        .create_async()
        .await;

    let adapter = DockerHub::with_base_url(test_client(), server.url());
    let result = adapter.resolve("library", "ubuntu", "20.04").await;

    mock.assert_async().await;
    assert_eq!(result.availability, Availability::Available);
    assert_eq!(
        result.last_published.as_deref(),
        Some("2024-01-15T10:30:00.000000Z")
    );
}

#[tokio::test]
async fn test_docker_hub_lowercases_owner_and_repository() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/myuser/myimage/tags/v1.0")
        .with_status(200)
        .with_body(r#"{"last_updated":"2023-06-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let adapter = DockerHub::with_base_url(test_client(), server.url());
    let result = adapter.resolve("MyUser", "MyImage", "v1.0").await;

    mock.assert_async().await;
    assert!(result.is_available());
}

#[tokio::test]
async fn test_docker_hub_missing_field_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/ubuntu/tags/nope")
        .with_status(200)
        .with_body(r#"{"message":"tag not found"}"#)
        .create_async()
        .await;

    let adapter = DockerHub::with_base_url(test_client(), server.url());
    let result = adapter.resolve("library", "ubuntu", "nope").await;

    assert_eq!(result.availability, Availability::NotFound);
    assert_eq!(result.last_published_date(), "N/A");
}

#[tokio::test]
async fn test_docker_hub_404_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/ubuntu/tags/gone")
        .with_status(404)
        .create_async()
        .await;

    let adapter = DockerHub::with_base_url(test_client(), server.url());
    let result = adapter.resolve("library", "ubuntu", "gone").await;

    assert_eq!(result.availability, Availability::NotFound);
}

#[tokio::test]
async fn test_docker_hub_server_error_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/ubuntu/tags/latest")
        .with_status(500)
        .create_async()
        .await;

    let adapter = DockerHub::with_base_url(test_client(), server.url());
    let result = adapter.resolve("library", "ubuntu", "latest").await;

    assert_eq!(result.availability, Availability::Error);
}

#[tokio::test]
async fn test_docker_hub_unreachable_is_unknown() {
    let server = mockito::Server::new_async().await;
    let url = server.url();
    drop(server);

    let adapter = DockerHub::with_base_url(test_client(), url);
    let result = adapter.resolve("library", "ubuntu", "latest").await;

    assert_eq!(result.availability, Availability::Unknown);
}

// GHCR adapter

#[tokio::test]
async fn test_ghcr_available_sends_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/myuser/packages/container/myimage")
        .match_header("authorization", "Bearer ghp_token")
        .match_header("accept", "application/vnd.github+json")
        .with_status(200)
        .with_body(r#"{"name":"myimage","updated_at":"2024-03-20T08:00:00Z"}"#)
        .create_async()
        .await;

    let adapter = Ghcr::with_base_url(test_client(), server.url());
    let result = adapter
        .resolve("myuser", "myimage", "latest", Some("ghp_token"))
        .await;

    mock.assert_async().await;
    assert_eq!(result.availability, Availability::Available);
    assert_eq!(result.last_published.as_deref(), Some("2024-03-20T08:00:00Z"));
}

#[tokio::test]
async fn test_ghcr_tag_does_not_affect_query() {
    let mut server = mockito::Server::new_async().await;
    // The package endpoint carries no tag; both lookups hit the same path.
    let mock = server
        .mock("GET", "/users/myuser/packages/container/myimage")
        .with_status(200)
        .with_body(r#"{"updated_at":"2024-03-20T08:00:00Z"}"#)
        .expect(2)
        .create_async()
        .await;

    let adapter = Ghcr::with_base_url(test_client(), server.url());
    let first = adapter.resolve("myuser", "myimage", "v1.0", None).await;
    let second = adapter.resolve("myuser", "myimage", "v2.0", None).await;

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_ghcr_401_is_auth_required() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/myuser/packages/container/private")
        .with_status(401)
        .create_async()
        .await;

    let adapter = Ghcr::with_base_url(test_client(), server.url());
    let result = adapter.resolve("myuser", "private", "latest", None).await;

    assert_eq!(result.availability, Availability::AuthRequired);
}

#[tokio::test]
async fn test_ghcr_404_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/myuser/packages/container/missing")
        .with_status(404)
        .create_async()
        .await;

    let adapter = Ghcr::with_base_url(test_client(), server.url());
    let result = adapter.resolve("myuser", "missing", "latest", None).await;

    assert_eq!(result.availability, Availability::NotFound);
}

#[tokio::test]
async fn test_ghcr_unreachable_is_unknown() {
    let server = mockito::Server::new_async().await;
    let url = server.url();
    drop(server);

    let adapter = Ghcr::with_base_url(test_client(), url);
    let result = adapter.resolve("myuser", "myimage", "latest", None).await;

    assert_eq!(result.availability, Availability::Unknown);
}

// Codeberg adapter

#[tokio::test]
async fn test_codeberg_available_includes_tag_in_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/packages/phillxnet/container/bareos-file/latest")
        .with_status(200)
        .with_body(r#"{"name":"bareos-file","created_at":"2023-11-02T12:00:00Z"}"#)
        .create_async()
        .await;

    let adapter = Codeberg::with_base_url(test_client(), server.url());
    let result = adapter
        .resolve("phillxnet", "bareos-file", "latest", None)
        .await;

    mock.assert_async().await;
    assert_eq!(result.availability, Availability::Available);
    assert_eq!(result.last_published.as_deref(), Some("2023-11-02T12:00:00Z"));
}

#[tokio::test]
async fn test_codeberg_missing_field_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/packages/user/container/app/v9")
        .with_status(200)
        .with_body(r#"{"message":"no such version"}"#)
        .create_async()
        .await;

    let adapter = Codeberg::with_base_url(test_client(), server.url());
    let result = adapter.resolve("user", "app", "v9", None).await;

    assert_eq!(result.availability, Availability::NotFound);
}

#[tokio::test]
async fn test_codeberg_404_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/packages/user/container/app/latest")
        .with_status(404)
        .create_async()
        .await;

    let adapter = Codeberg::with_base_url(test_client(), server.url());
    let result = adapter.resolve("user", "app", "latest", None).await;

    assert_eq!(result.availability, Availability::NotFound);
}

#[tokio::test]
async fn test_codeberg_server_error_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v1/packages/user/container/app/latest")
        .with_status(502)
        .create_async()
        .await;

    let adapter = Codeberg::with_base_url(test_client(), server.url());
    let result = adapter.resolve("user", "app", "latest", None).await;

    assert_eq!(result.availability, Availability::Error);
}

// Dispatch

async fn mock_resolver(
    hub: &mockito::Server,
    ghcr: &mockito::Server,
    codeberg: &mockito::Server,
    credentials: Credentials,
) -> Resolver {
    Resolver::with_adapters(
        DockerHub::with_base_url(test_client(), hub.url()),
        Ghcr::with_base_url(test_client(), ghcr.url()),
        Codeberg::with_base_url(test_client(), codeberg.url()),
        credentials,
    )
}

#[tokio::test]
async fn test_resolver_routes_ghcr_only_to_ghcr() {
    let mut hub = mockito::Server::new_async().await;
    let mut ghcr = mockito::Server::new_async().await;
    let mut codeberg = mockito::Server::new_async().await;

    let hub_mock = hub
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let codeberg_mock = codeberg
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let ghcr_mock = ghcr
        .mock("GET", "/users/org/packages/container/app")
        .with_status(200)
        .with_body(r#"{"updated_at":"2024-05-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let resolver = mock_resolver(&hub, &ghcr, &codeberg, Credentials::new()).await;
    let reference = Reference::parse("ghcr.io/org/app:v1", None);
    let result = resolver.resolve(&reference).await;

    hub_mock.assert_async().await;
    ghcr_mock.assert_async().await;
    codeberg_mock.assert_async().await;
    assert!(result.is_available());
}

#[tokio::test]
async fn test_resolver_routes_codeberg_only_to_codeberg() {
    let mut hub = mockito::Server::new_async().await;
    let mut ghcr = mockito::Server::new_async().await;
    let mut codeberg = mockito::Server::new_async().await;

    let hub_mock = hub
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let ghcr_mock = ghcr
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let codeberg_mock = codeberg
        .mock("GET", "/api/v1/packages/user/container/app/latest")
        .with_status(200)
        .with_body(r#"{"created_at":"2024-05-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let resolver = mock_resolver(&hub, &ghcr, &codeberg, Credentials::new()).await;
    let reference = Reference::parse("codeberg.org/user/app", None);
    let result = resolver.resolve(&reference).await;

    hub_mock.assert_async().await;
    ghcr_mock.assert_async().await;
    codeberg_mock.assert_async().await;
    assert!(result.is_available());
}

#[tokio::test]
async fn test_resolver_routes_unscoped_reference_to_docker_hub() {
    let mut hub = mockito::Server::new_async().await;
    let mut ghcr = mockito::Server::new_async().await;
    let mut codeberg = mockito::Server::new_async().await;

    let ghcr_mock = ghcr
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let codeberg_mock = codeberg
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let hub_mock = hub
        .mock("GET", "/v2/repositories/library/ubuntu/tags/20.04")
        .with_status(200)
        .with_body(r#"{"last_updated":"2024-01-15T10:30:00Z"}"#)
        .create_async()
        .await;

    let resolver = mock_resolver(&hub, &ghcr, &codeberg, Credentials::new()).await;
    let reference = Reference::parse("ubuntu:20.04", None);
    let result = resolver.resolve(&reference).await;

    hub_mock.assert_async().await;
    ghcr_mock.assert_async().await;
    codeberg_mock.assert_async().await;
    assert!(result.is_available());
}

#[tokio::test]
async fn test_resolver_passes_github_token_through() {
    let hub = mockito::Server::new_async().await;
    let mut ghcr = mockito::Server::new_async().await;
    let codeberg = mockito::Server::new_async().await;

    let ghcr_mock = ghcr
        .mock("GET", "/users/org/packages/container/app")
        .match_header("authorization", "Bearer ghp_secret")
        .with_status(200)
        .with_body(r#"{"updated_at":"2024-05-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let credentials = Credentials::new().with_github_token("ghp_secret");
    let resolver = mock_resolver(&hub, &ghcr, &codeberg, credentials).await;
    let reference = Reference::parse("ghcr.io/org/app", None);
    let result = resolver.resolve(&reference).await;

    ghcr_mock.assert_async().await;
    assert!(result.is_available());
}
