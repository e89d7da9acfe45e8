use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    etsy,
    types::{AuthRequest, PkceSession},
};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceSession>>>, request: AuthRequest) {
    etsy::auth::auth(shared_state, request).await;
}
