use std::path::PathBuf;

use crate::{config, etsy, types::Token};

/// Owns the current access/refresh token pair.
///
/// The pair lives in `<data_local_dir>/etsyproxy/cache/token.json`, written
/// by the auth flow and replaced wholesale on every refresh. When no file
/// exists yet, the `ETSY_ACCESS_TOKEN`/`ETSY_REFRESH_TOKEN` environment
/// variables act as the bootstrap source for tokens obtained elsewhere.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        match async_fs::read_to_string(&path).await {
            Ok(content) => {
                let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
                Ok(Self { token })
            }
            Err(_) => Self::from_env(),
        }
    }

    fn from_env() -> Result<Self, String> {
        let access_token = config::etsy_access_token()
            .ok_or_else(|| "no stored token pair and ETSY_ACCESS_TOKEN is not set".to_string())?;
        let refresh_token = config::etsy_refresh_token()
            .ok_or_else(|| "no stored token pair and ETSY_REFRESH_TOKEN is not set".to_string())?;

        Ok(Self {
            token: Token {
                access_token,
                refresh_token,
            },
        })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Exchanges the current refresh token for a new pair and persists it.
    /// Called once per proxy invocation, independent of token age.
    pub async fn refresh(&mut self) -> Result<(), String> {
        let new_token =
            etsy::auth::refresh_token(&config::etsy_client_id(), &self.token.refresh_token).await?;
        self.token = new_token;
        self.persist().await
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("etsyproxy/cache/token.json");
        path
    }
}
