use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ApiConfig::default();
    assert_eq!(config.register_url(), "http://localhost:8080/register");
    assert_eq!(config.session_url(), "http://localhost:8080/user-session");
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let config = ApiConfig::with_base_url("https://portal.example.edu/api//");
    assert_eq!(config.register_url(), "https://portal.example.edu/api/register");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(ApiConfig::with_base_url("   "), ApiConfig::default());
}

#[test]
fn log_level_parses_known_names() {
    assert_eq!(log_level(Some("debug")), log::Level::Debug);
    assert_eq!(log_level(Some("WARN")), log::Level::Warn);
}

#[test]
fn log_level_defaults_to_info() {
    assert_eq!(log_level(None), log::Level::Info);
    assert_eq!(log_level(Some("chatty")), log::Level::Info);
}
