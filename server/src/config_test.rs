use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_ROOT", "/srv/site")]))
            .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", ""), ("SITE_ROOT", " ")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT '70000'"));
}

#[test]
fn from_lookup_rejects_port_zero() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "0")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidPort { value: "0".to_owned(), reason: "port must be non-zero".to_owned() }
    );
}
