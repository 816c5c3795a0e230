#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use hostbeat_server::config;

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_when_unset() {
    let vars = env(&[]);
    let cfg = config::load_from_lookup(|k| vars.get(k).cloned());
    assert_eq!(cfg.port, 3001);
    assert_eq!(cfg.app_name, "App1");
}

#[test]
fn explicit_values_win() {
    let vars = env(&[("PORT", "8080"), ("APP_NAME", "App2")]);
    let cfg = config::load_from_lookup(|k| vars.get(k).cloned());
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.app_name, "App2");
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn non_numeric_port_falls_back() {
    let vars = env(&[("PORT", "abc")]);
    let cfg = config::load_from_lookup(|k| vars.get(k).cloned());
    assert_eq!(cfg.port, 3001);
}

#[test]
fn out_of_range_port_falls_back() {
    let vars = env(&[("PORT", "70000")]);
    let cfg = config::load_from_lookup(|k| vars.get(k).cloned());
    assert_eq!(cfg.port, 3001);
}

#[test]
fn empty_values_fall_back() {
    let vars = env(&[("PORT", ""), ("APP_NAME", "")]);
    let cfg = config::load_from_lookup(|k| vars.get(k).cloned());
    assert_eq!(cfg.port, 3001);
    assert_eq!(cfg.app_name, "App1");
}
