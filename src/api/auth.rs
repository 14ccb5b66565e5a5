use poem_openapi::{payload::Json, OpenApi, Tags, SecurityScheme, auth::Bearer};
use crate::stores::UserStore;
use crate::services::{PasswordService, TokenService};
use crate::types::dto::auth::{LoginRequest, LoginResponse, LoginUser};
use crate::errors::api::auth::AuthError;
use std::sync::Arc;

/// Authentication API endpoints
pub struct AuthApi {
    user_store: Arc<UserStore>,
    password_service: Arc<PasswordService>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi with the given UserStore, PasswordService and TokenService
    pub fn new(
        user_store: Arc<UserStore>,
        password_service: Arc<PasswordService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_store,
            password_service,
            token_service,
        }
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with email and password to receive an access token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    pub async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        // Look up the account by email
        let user = self
            .user_store
            .find_by_email(&body.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Account lookup during login failed");
                AuthError::internal_error()
            })?;

        // Unknown email and wrong password leave through the same 401
        let Some(user) = user else {
            return Err(AuthError::invalid_credentials());
        };

        if !self.password_service.verify(&user.password_hash, &body.password) {
            return Err(AuthError::invalid_credentials());
        }

        // Generate JWT carrying the account id
        let access_token = self.token_service.generate_jwt(user.id).map_err(|e| {
            tracing::error!(error = %e, "JWT generation failed");
            AuthError::internal_error()
        })?;

        tracing::info!(user_id = user.id, "Login succeeded");

        Ok(Json(LoginResponse {
            success: true,
            access_token,
            user: LoginUser {
                email: user.email,
                id: user.id,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::payload::Json;
    use sea_orm::{Database, DatabaseConnection};
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> (
        DatabaseConnection,
        Arc<UserStore>,
        Arc<PasswordService>,
        Arc<TokenService>,
    ) {
        // Create in-memory SQLite database for testing
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let user_store = Arc::new(UserStore::new(db.clone()));
        // Light hashing costs keep the seeded account cheap
        let password_service = Arc::new(PasswordService::with_params(
            argon2::Params::new(64, 1, 1, None).unwrap(),
        ));

        // Create token service with test secret
        let token_service = Arc::new(TokenService::new(
            "test-secret-key-minimum-32-characters-long".to_string(),
        ));

        // Seed an administrative account
        let password_hash = password_service
            .hash("senha-secreta")
            .expect("Failed to hash password");
        user_store
            .ensure_admin_account("admin@cognvox.net", password_hash, true)
            .await
            .expect("Failed to seed admin account");

        (db, user_store, password_service, token_service)
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let (_db, user_store, password_service, token_service) = setup_test_db().await;
        let api = AuthApi::new(user_store, password_service, token_service);

        let request = Json(LoginRequest {
            email: "admin@cognvox.net".to_string(),
            password: "senha-secreta".to_string(),
        });

        let result = api.login(request).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert!(response.success);
        assert!(!response.access_token.is_empty());
        assert_eq!(response.user.email, "admin@cognvox.net");
        assert!(response.user.id > 0);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let (_db, user_store, password_service, token_service) = setup_test_db().await;
        let api = AuthApi::new(user_store, password_service, token_service);

        let request = Json(LoginRequest {
            email: "admin@cognvox.net".to_string(),
            password: "senha-errada".to_string(),
        });

        let result = api.login(request).await;

        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidCredentials(_)) => {
                // Expected error type
            }
            _ => panic!("Expected InvalidCredentials error"),
        }
    }

    #[tokio::test]
    async fn test_login_with_unknown_email() {
        let (_db, user_store, password_service, token_service) = setup_test_db().await;
        let api = AuthApi::new(user_store, password_service, token_service);

        let request = Json(LoginRequest {
            email: "nobody@cognvox.net".to_string(),
            password: "senha-secreta".to_string(),
        });

        let result = api.login(request).await;

        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidCredentials(_)) => {
                // Expected error type
            }
            _ => panic!("Expected InvalidCredentials error"),
        }
    }

    #[tokio::test]
    async fn test_login_failures_share_one_message() {
        let (_db, user_store, password_service, token_service) = setup_test_db().await;
        let api = AuthApi::new(user_store, password_service, token_service);

        let unknown = api
            .login(Json(LoginRequest {
                email: "nobody@cognvox.net".to_string(),
                password: "senha-secreta".to_string(),
            }))
            .await
            .unwrap_err();
        let wrong_password = api
            .login(Json(LoginRequest {
                email: "admin@cognvox.net".to_string(),
                password: "senha-errada".to_string(),
            }))
            .await
            .unwrap_err();

        // An attacker probing emails sees the same response either way
        assert_eq!(unknown.message(), "Credenciais inválidas");
        assert_eq!(wrong_password.message(), "Credenciais inválidas");
    }

    #[tokio::test]
    async fn test_login_returns_decodable_jwt() {
        let (_db, user_store, password_service, token_service) = setup_test_db().await;
        let api = AuthApi::new(user_store.clone(), password_service, token_service);

        let request = Json(LoginRequest {
            email: "admin@cognvox.net".to_string(),
            password: "senha-secreta".to_string(),
        });

        let result = api.login(request).await;

        assert!(result.is_ok());
        let response = result.unwrap();

        // Decode JWT and verify it contains expected claims
        use jsonwebtoken::{decode, Validation, DecodingKey, Algorithm};
        use crate::types::internal::auth::Claims;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // Don't validate expiration in test

        let decoded = decode::<Claims>(
            &response.access_token,
            &DecodingKey::from_secret("test-secret-key-minimum-32-characters-long".as_bytes()),
            &validation,
        );

        assert!(decoded.is_ok());
        let claims = decoded.unwrap().claims;

        // Verify claims carry the seeded account's id
        let account = user_store
            .find_by_email("admin@cognvox.net")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(claims.sub, account.id.to_string());
        assert_eq!(claims.exp - claims.iat, 900); // Should be 15 minutes (900 seconds)
    }

    #[tokio::test]
    async fn test_login_response_uses_camel_case_token_key() {
        let (_db, user_store, password_service, token_service) = setup_test_db().await;
        let api = AuthApi::new(user_store, password_service, token_service);

        let request = Json(LoginRequest {
            email: "admin@cognvox.net".to_string(),
            password: "senha-secreta".to_string(),
        });

        let response = api.login(request).await.unwrap();
        let json = serde_json::to_value(&response.0).expect("Failed to serialize response");

        // The frontend reads `accessToken`, not `access_token`
        assert!(json.get("accessToken").is_some());
        assert!(json.get("access_token").is_none());
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["email"], "admin@cognvox.net");
    }
}
