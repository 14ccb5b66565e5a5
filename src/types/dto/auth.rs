use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address of the administrative account
    pub email: String,

    /// Password for authentication
    pub password: String,
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always true when a token was issued
    pub success: bool,

    /// JWT bearer token for subsequent requests
    #[oai(rename = "accessToken")]
    #[serde(rename = "accessToken")]
    pub access_token: String,

    /// Summary of the authenticated account
    pub user: LoginUser,
}

/// Account summary embedded in the login response
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginUser {
    /// Login email of the account
    pub email: String,

    /// Numeric account id
    pub id: i32,
}
