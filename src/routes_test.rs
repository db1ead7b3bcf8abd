use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn route_error_names_leptos_configuration() {
    let err = RouteError::LeptosConfig("missing output-name".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing output-name");
}
