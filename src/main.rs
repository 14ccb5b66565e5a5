mod api;
mod bootstrap;
mod config;
mod errors;
mod services;
mod stores;
mod types;

use poem::{listener::TcpListener, middleware::Cors, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;
use api::{AtorApi, AuthApi, LookupApi};
use config::Settings;
use services::{PasswordService, TokenService};
use stores::{AtorStore, LookupStore, UserStore};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Logging comes up first so everything after it is captured
    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let settings = Settings::from_env();
    tracing::info!(?settings, "Configuration loaded");

    // Connect to database
    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!(database_url = %settings.database_url, "Connected to database");

    let user_store = Arc::new(UserStore::new(db.clone()));
    let ator_store = Arc::new(AtorStore::new(db.clone()));
    let lookup_store = Arc::new(LookupStore::new(db.clone()));
    let password_service = Arc::new(PasswordService::new());
    let token_service = Arc::new(TokenService::new(settings.jwt_secret.clone()));

    // Migrations plus admin seeding; requests are served even if this fails
    if let Err(e) = bootstrap::run(&db, &user_store, &password_service, &settings).await {
        tracing::error!(error = %e, "Startup provisioning failed, serving anyway");
    }

    // Wire the API endpoints to their stores and services
    let auth_api = AuthApi::new(
        user_store.clone(),
        password_service.clone(),
        token_service.clone(),
    );
    let ator_api = AtorApi::new(ator_store.clone(), token_service.clone());
    let lookup_api = LookupApi::new(lookup_store, ator_store, token_service);

    // Create OpenAPI service with API implementation
    let api_service = OpenApiService::new(
        (auth_api, ator_api, lookup_api),
        "Cognvox Registry API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", settings.bind_addr));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: API at the root, Swagger UI under /swagger
    let app = Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(Cors::new());

    tracing::info!(bind_addr = %settings.bind_addr, "Starting server");

    // Start Poem server with composed routes
    Server::new(TcpListener::bind(settings.bind_addr.clone()))
        .run(app)
        .await
}
