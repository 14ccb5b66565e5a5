// Integration tests for environment-driven configuration

mod common;

use cognvox_backend::config::Settings;

const SETTINGS_VARS: [&str; 6] = [
    "DATABASE_URL",
    "JWT_SECRET",
    "BIND_ADDR",
    "ADMIN_EMAIL",
    "ADMIN_PASSWORD",
    "ADMIN_RESET_PASSWORD",
];

#[test]
fn test_from_env_uses_development_defaults() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(SETTINGS_VARS.to_vec());

    let settings = Settings::from_env();

    assert_eq!(settings.database_url, "sqlite://cognvox.db?mode=rwc");
    assert_eq!(settings.jwt_secret, "super_segredo_cognvox_2026");
    assert_eq!(settings.bind_addr, "0.0.0.0:5000");
    assert_eq!(settings.admin_email, "admin@cognvox.net");
    assert_eq!(settings.admin_password, "123456");
    assert!(settings.admin_reset_password);
}

#[test]
fn test_from_env_reads_overrides() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(SETTINGS_VARS.to_vec());

    unsafe {
        std::env::set_var("DATABASE_URL", "sqlite://other.db?mode=rwc");
        std::env::set_var("JWT_SECRET", "operator-managed-secret");
        std::env::set_var("BIND_ADDR", "127.0.0.1:8080");
        std::env::set_var("ADMIN_EMAIL", "root@example.net");
        std::env::set_var("ADMIN_PASSWORD", "operator-chosen");
        std::env::set_var("ADMIN_RESET_PASSWORD", "false");
    }

    let settings = Settings::from_env();

    assert_eq!(settings.database_url, "sqlite://other.db?mode=rwc");
    assert_eq!(settings.jwt_secret, "operator-managed-secret");
    assert_eq!(settings.bind_addr, "127.0.0.1:8080");
    assert_eq!(settings.admin_email, "root@example.net");
    assert_eq!(settings.admin_password, "operator-chosen");
    assert!(!settings.admin_reset_password);
}

#[test]
fn test_reset_flag_spellings() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(SETTINGS_VARS.to_vec());

    for (value, expected) in [
        ("1", true),
        ("yes", true),
        ("TRUE", true),
        ("0", false),
        ("off", false),
        ("", false),
    ] {
        unsafe {
            std::env::set_var("ADMIN_RESET_PASSWORD", value);
        }
        assert_eq!(
            Settings::from_env().admin_reset_password,
            expected,
            "spelling {value:?}"
        );
    }
}
