use super::*;

#[test]
fn missing_port_uses_default() {
    let config = Config::from_port_var(None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn blank_port_uses_default() {
    let config = Config::from_port_var(Some("  ")).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn explicit_port_is_parsed() {
    let config = Config::from_port_var(Some("8080")).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = Config::from_port_var(Some("http")).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(Config::from_port_var(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = Config { port: 4000 };
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:4000");
}
