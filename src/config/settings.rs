use std::env;
use std::fmt;

/// Runtime configuration pulled from the environment once at startup
///
/// Every field has a development default so a bare `cargo run` comes up
/// against a local SQLite file. Deployments are expected to override at
/// least `DATABASE_URL` and `JWT_SECRET`.
#[derive(Clone)]
pub struct Settings {
    /// Connection string handed to the database layer
    pub database_url: String,
    /// Secret used to sign and validate JWTs
    pub jwt_secret: String,
    /// Address and port the HTTP server binds
    pub bind_addr: String,
    /// Email of the seeded administrative account
    pub admin_email: String,
    /// Password the seeder hashes for the administrative account
    pub admin_password: String,
    /// Whether the seeder overwrites an existing admin password hash
    pub admin_reset_password: bool,
}

impl Settings {
    /// Load settings from environment variables, falling back to the
    /// development defaults for anything unset
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://cognvox.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            "super_segredo_cognvox_2026".to_string()
        });

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@cognvox.net".to_string());

        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "123456".to_string());

        let admin_reset_password = env::var("ADMIN_RESET_PASSWORD")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Self {
            database_url,
            jwt_secret,
            bind_addr,
            admin_email,
            admin_password,
            admin_reset_password,
        }
    }
}

/// Accepts the usual spellings of an enabled flag; everything else is off
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"<redacted>")
            .field("admin_reset_password", &self.admin_reset_password)
            .finish()
    }
}
