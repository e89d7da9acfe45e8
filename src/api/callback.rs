use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{etsy, types::PkceSession, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceSession>>>>,
) -> Html<&'static str> {
    if let Some(code) = params.get("code") {
        let mut state = shared_state.lock().await;
        // Take the session started by the auth command
        let Some(session) = state.as_mut() else {
            return Html("<h4>No authorization in progress.</h4>");
        };

        if params.get("state") != Some(&session.state) {
            warning!("Callback state nonce does not match this session.");
            return Html("<h4>State mismatch.</h4>");
        }

        match etsy::auth::exchange_code_pkce(code, session).await {
            Ok(token) => {
                session.token = Some(token);
                Html("<h2>Authorization successful.</h2><p>Close browser window.</p>")
            }
            Err(e) => {
                warning!("Token exchange failed: {}", e);
                Html("<h4>Authorization failed.</h4>")
            }
        }
    } else {
        Html("<h4>Missing authorization code.</h4>")
    }
}
