use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::config::Settings;
use crate::errors::internal::InternalError;
use crate::services::PasswordService;
use crate::stores::{AdminSeedOutcome, UserStore};

/// Bring the schema up to date and guarantee the administrative account
///
/// Runs once per process start, before the server begins accepting
/// requests. The caller treats a failure here as a warning rather than a
/// reason to stop serving, so a database that comes up late only costs
/// the seeding until the next restart.
pub async fn run(
    db: &DatabaseConnection,
    user_store: &UserStore,
    password_service: &PasswordService,
    settings: &Settings,
) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;
    tracing::debug!("Database schema is up to date");

    let password_hash = password_service.hash(&settings.admin_password)?;

    let outcome = user_store
        .ensure_admin_account(
            &settings.admin_email,
            password_hash,
            settings.admin_reset_password,
        )
        .await?;

    match outcome {
        AdminSeedOutcome::Created => {
            tracing::info!("Admin account created for {}", settings.admin_email);
        }
        AdminSeedOutcome::PasswordReset => {
            tracing::info!(
                "Admin account for {} refreshed with the configured password",
                settings.admin_email
            );
        }
        AdminSeedOutcome::AlreadyPresent => {
            tracing::debug!(
                "Admin account for {} already present, password left alone",
                settings.admin_email
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    fn test_settings(reset: bool) -> Settings {
        Settings {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret-key-minimum-32-characters-long".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            admin_email: "admin@cognvox.net".to_string(),
            admin_password: "123456".to_string(),
            admin_reset_password: reset,
        }
    }

    async fn setup_test_db() -> DatabaseConnection {
        Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database")
    }

    fn light_password_service() -> PasswordService {
        PasswordService::with_params(argon2::Params::new(64, 1, 1, None).unwrap())
    }

    #[tokio::test]
    async fn test_run_creates_verifiable_admin_account() {
        let db = setup_test_db().await;
        let user_store = UserStore::new(db.clone());
        let password_service = light_password_service();
        let settings = test_settings(true);

        run(&db, &user_store, &password_service, &settings)
            .await
            .unwrap();

        let account = user_store
            .find_by_email("admin@cognvox.net")
            .await
            .unwrap()
            .expect("admin account missing after bootstrap");

        assert!(account.is_admin);
        assert!(password_service.verify(&account.password_hash, "123456"));
    }

    #[tokio::test]
    async fn test_run_twice_is_idempotent() {
        let db = setup_test_db().await;
        let user_store = UserStore::new(db.clone());
        let password_service = light_password_service();
        let settings = test_settings(true);

        run(&db, &user_store, &password_service, &settings)
            .await
            .unwrap();
        run(&db, &user_store, &password_service, &settings)
            .await
            .unwrap();

        use crate::types::db::user::Entity as User;
        use sea_orm::EntityTrait;
        let accounts = User::find().all(&db).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert!(password_service.verify(&accounts[0].password_hash, "123456"));
    }

    #[tokio::test]
    async fn test_run_respects_reset_flag() {
        let db = setup_test_db().await;
        let user_store = UserStore::new(db.clone());
        let password_service = light_password_service();

        run(&db, &user_store, &password_service, &test_settings(true))
            .await
            .unwrap();

        // Rotate the password behind the seeder's back
        let rotated_hash = password_service.hash("operator-chosen").unwrap();
        user_store
            .ensure_admin_account("admin@cognvox.net", rotated_hash, true)
            .await
            .unwrap();

        // A restart with resets disabled keeps the rotated password
        run(&db, &user_store, &password_service, &test_settings(false))
            .await
            .unwrap();

        let account = user_store
            .find_by_email("admin@cognvox.net")
            .await
            .unwrap()
            .unwrap();
        assert!(password_service.verify(&account.password_hash, "operator-chosen"));
        assert!(!password_service.verify(&account.password_hash, "123456"));
    }
}
