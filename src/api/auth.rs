use std::sync::Arc;

use axum::{Extension, http::HeaderMap, response::Redirect};

use crate::{server::AppContext, spotify::client::SpotifyClient, utils};

/// Entry point of the authorization flow.
///
/// Mints a fresh state token, records it as live, and redirects the browser
/// to the provider's authorization page.
pub async fn auth(Extension(ctx): Extension<AppContext>, headers: HeaderMap) -> Redirect {
    let state = utils::generate_state_token();
    ctx.states.insert(state.clone()).await;

    let client = SpotifyClient::from_request(Arc::clone(&ctx.config), &headers);

    Redirect::to(&client.authorize_url(&state))
}
