use axum::{
    Extension,
    response::{IntoResponse, Redirect, Response},
};

use crate::{Res, spotify, spotify::client::SpotifyClient, success, warning};

/// Number of independent sampling operations per playlist.
const SAMPLE_COUNT: usize = 50;

/// Builds a playlist of randomly sampled tracks and redirects to it.
///
/// Every failure in the build, including an expired access token, is treated
/// the same way: log it and send the browser back through authentication.
pub async fn new_playlist(Extension(client): Extension<SpotifyClient>) -> Response {
    match build_random_playlist(&client).await {
        Ok(playlist_url) => Redirect::to(&playlist_url).into_response(),
        Err(e) => {
            warning!("Failed to build playlist: {}", e);
            Redirect::to("/auth").into_response()
        }
    }
}

/// Samples tracks, creates the playlist, fills it, and returns its public URL.
///
/// The samplers run concurrently and are joined in spawn order, so the
/// submitted track list follows sampling order rather than response arrival.
/// Samples that failed or matched nothing are dropped; zero survivors still
/// produce a playlist, just an empty one.
async fn build_random_playlist(client: &SpotifyClient) -> Res<String> {
    let mut handles = Vec::new();

    for _ in 0..SAMPLE_COUNT {
        let client = client.clone();
        let handle = tokio::spawn(async move { spotify::search::random_song(&client).await });
        handles.push(handle);
    }

    let mut track_uris: Vec<String> = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(Some(track)) => track_uris.push(track.uri),
            Ok(None) => {}
            Err(e) => {
                warning!("Sampling task failed to join: {}", e);
            }
        }
    }

    let playlist = client.create_playlist().await?;
    let track_count = track_uris.len();
    client.add_tracks(&playlist.id, track_uris).await?;

    success!("Created playlist {} with {} tracks", playlist.id, track_count);

    Ok(playlist.external_urls.spotify)
}
