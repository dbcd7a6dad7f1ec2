use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_vars_defaults_when_empty() {
    let cfg = HostConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, site_root: None, api_url: None });
}

#[test]
fn from_vars_reads_overrides() {
    let cfg = HostConfig::from_vars(vars(&[
        ("PORT", "8080"),
        ("LAPAK_SITE_ROOT", "/srv/lapak/site"),
        ("LAPAK_API_URL", " https://api.lapak.test/api "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/lapak/site")));
    assert_eq!(cfg.api_url.as_deref(), Some("https://api.lapak.test/api"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_vars(vars(&[("PORT", "  "), ("LAPAK_SITE_ROOT", ""), ("LAPAK_API_URL", " ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_root.is_none());
    assert!(cfg.api_url.is_none());
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = HostConfig::from_vars(vars(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == raw), "{raw}: {err}");
    }
}

#[test]
fn site_root_override_wins_over_leptos_options() {
    let options = LeptosOptions::builder().output_name("lapak").site_root("target/site").build();
    let default_cfg = HostConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(default_cfg.site_root_or(&options), PathBuf::from("target/site"));

    let cfg = HostConfig::from_vars(vars(&[("LAPAK_SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(cfg.site_root_or(&options), PathBuf::from("/srv/site"));
}
