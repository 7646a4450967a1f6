//! Login, logout, and profile

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::session::{Session, User};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
    user: User,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token. The returned session is
    /// active; persisting it is the caller's business.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let data: LoginData = self
            .client
            .post("auth/login", &LoginRequest { email, password })
            .await?
            .into_data()?;
        let mut session = Session::default();
        session.activate(data.token, data.user);
        Ok(session)
    }

    /// Invalidate the token server-side. The local session file is cleared
    /// by the caller regardless of whether this succeeds.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client
            .post::<_, serde_json::Value>("auth/logout", &serde_json::json!({}))
            .await?
            .into_unit()
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.client.get("auth/profile", &[]).await?.into_data()
    }
}
