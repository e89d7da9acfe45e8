use std::{sync::Arc, time::Duration};

use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error, info,
    management::TokenManager,
    server::start_callback_server,
    success,
    types::{AuthRequest, PkceSession, Token},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 PKCE authorization flow with Etsy.
///
/// This function orchestrates the entire authorization process:
/// 1. Generating the PKCE code verifier and challenge
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser (and always
///    printing it for manual use)
/// 4. Waiting for the OAuth callback to complete the code exchange
/// 5. Printing the obtained token pair and persisting it for the proxy
///
/// The PKCE (Proof Key for Code Exchange) flow provides enhanced security
/// for OAuth flows without requiring a client secret to be stored.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared session passed between this flow
///   driver and the callback handler; replaces process-wide variables
/// * `request` - Resolved authorization parameters (client id, redirect
///   URI, scopes, verifier length)
///
/// # Error Handling
///
/// - Browser launch failures result in a warning; the printed URL remains
///   usable
/// - Token persistence failures terminate the program with an error
/// - An authorization that does not complete within the timeout terminates
///   with an error message instead of blocking forever
pub async fn auth(shared_state: Arc<Mutex<Option<PkceSession>>>, request: AuthRequest) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier(request.verifier_length);
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state_nonce = utils::generate_state_nonce();

    // start callback server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_callback_server(server_state).await;
    });

    let auth_url = match build_authorize_url(&request, &code_challenge, &state_nonce) {
        Ok(url) => url,
        Err(e) => error!("Failed to build authorization URL: {}", e),
    };

    // Store the session before redirect so the callback can finish the flow
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceSession {
            api_key: request.api_key.clone(),
            redirect_uri: request.redirect_uri.clone(),
            code_verifier,
            state: state_nonce,
            token: None,
        });
    }

    info!(
        "Open this link to authorize the application and generate a token pair:\n{}",
        auth_url
    );

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.")
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            info!("Access Token: {}", t.access_token);
            info!("Refresh Token: {}", t.refresh_token);

            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token pair: {}", e);
            }

            success!("Authorization successful!");
        }
        None => {
            error!("Authorization failed or timed out.");
        }
    }
}

/// Builds the Etsy authorize URL with every query parameter
/// percent-encoded.
pub fn build_authorize_url(
    request: &AuthRequest,
    code_challenge: &str,
    state: &str,
) -> Result<String, String> {
    let url = reqwest::Url::parse_with_params(
        &config::etsy_connect_url(),
        &[
            ("response_type", "code"),
            ("client_id", request.api_key.as_str()),
            ("redirect_uri", request.redirect_uri.as_str()),
            ("state", state),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", request.scopes.join(" ").as_str()),
        ],
    )
    .map_err(|e| e.to_string())?;

    // The pair serializer writes the scope separator as '+'; the authorize
    // page expects %20. No other parameter can contain a literal '+'.
    Ok(url.as_str().replace('+', "%20"))
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared session for a completed token pair with a 120-second
/// timeout. This function runs concurrently with the callback handler that
/// populates the token after a successful exchange; reaching the timeout
/// ends the run instead of leaving the listener serving forever.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceSession>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(session) = lock.as_ref() {
            if let Some(token) = &session.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a fresh access/refresh pair.
///
/// The proxy issues one of these per invocation, replacing the stored pair
/// wholesale. Unlike the listing-fetch path, a failure here is meant to
/// propagate to the caller.
pub async fn refresh_token(client_id: &str, refresh_token: &str) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(config::etsy_token_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("client_id", client_id),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_response(&json).ok_or_else(|| "malformed token response".to_string())
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the flow by presenting the code together with the session's
/// code verifier and redirect URI, as the token endpoint requires. The
/// authorization code is single-use and short-lived, so the exchange runs
/// immediately inside the callback handler.
pub async fn exchange_code_pkce(code: &str, session: &PkceSession) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(config::etsy_token_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &session.api_key),
            ("code", code),
            ("code_verifier", &session.code_verifier),
            ("redirect_uri", &session.redirect_uri),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_response(&json).ok_or_else(|| "malformed token response".to_string())
}

fn token_from_response(json: &Value) -> Option<Token> {
    Some(Token {
        access_token: json["access_token"].as_str()?.to_string(),
        refresh_token: json["refresh_token"].as_str()?.to_string(),
    })
}
