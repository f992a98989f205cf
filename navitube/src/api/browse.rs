//! Catalog access: browse pages, albums, artists, playlists

use super::TubeApi;
use crate::endpoint::BrowseEndpoint;
use crate::error::Result;
use crate::models::{AlbumItem, ArtistItem, PlaylistItem, SongItem, TubeItem};
use crate::pages::{
    AlbumPage, ArtistPage, ArtistSection, BrowsePage, PlaylistContinuationPage, PlaylistPage,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Browse id of the new-releases shelf
const BROWSE_ID_NEW_RELEASES: &str = "new_release_albums";

/// Response of the `/browse` endpoint
#[derive(Debug, Deserialize)]
struct BrowseResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    items: Vec<TubeItem>,
    #[serde(default)]
    continuation: Option<String>,
}

/// Response of the `/album` endpoint
#[derive(Debug, Deserialize)]
struct AlbumResponse {
    album: AlbumItem,
    playlist_id: String,
    #[serde(default)]
    songs: Vec<SongItem>,
    #[serde(default)]
    description: Option<String>,
}

/// Response of the `/artist` endpoint
#[derive(Debug, Deserialize)]
struct ArtistResponse {
    artist: ArtistItem,
    #[serde(default)]
    sections: Vec<ArtistSectionResponse>,
}

#[derive(Debug, Deserialize)]
struct ArtistSectionResponse {
    title: String,
    #[serde(default)]
    items: Vec<TubeItem>,
    #[serde(default)]
    more: Option<BrowseEndpoint>,
}

/// Response of the `/playlist` endpoint
#[derive(Debug, Deserialize)]
struct PlaylistResponse {
    playlist: PlaylistItem,
    #[serde(default)]
    songs: Vec<SongItem>,
    #[serde(default)]
    continuation: Option<String>,
}

/// Response of the `/playlist/continuation` endpoint
#[derive(Debug, Deserialize)]
struct PlaylistContinuationResponse {
    #[serde(default)]
    songs: Vec<SongItem>,
    #[serde(default)]
    continuation: Option<String>,
}

impl TubeApi {
    /// Fetches a catalog page by browse endpoint
    pub async fn browse(&self, endpoint: &BrowseEndpoint) -> Result<BrowsePage> {
        debug!(browse_id = %endpoint.browse_id, "Browsing");
        let body = json!({
            "browse_id": endpoint.browse_id,
            "params": endpoint.params,
        });
        let response: BrowseResponse = self.post("/browse", body).await?;
        Ok(Self::parse_browse(response))
    }

    /// Fetches the next page of a browse listing
    pub async fn browse_continuation(&self, continuation: &str) -> Result<BrowsePage> {
        debug!("Browsing continuation");
        let body = json!({ "continuation": continuation });
        let response: BrowseResponse = self.post("/browse", body).await?;
        Ok(Self::parse_browse(response))
    }

    /// Fetches a full album page
    ///
    /// The returned album header always carries the identifier of the
    /// playlist mirroring the album's track list.
    pub async fn album(&self, album_id: &str) -> Result<AlbumPage> {
        debug!("Fetching album {}", album_id);
        let body = json!({ "album_id": album_id });
        let response: AlbumResponse = self.post("/album", body).await?;

        let mut album = response.album;
        album.playlist_id = Some(response.playlist_id);

        Ok(AlbumPage {
            album,
            songs: response.songs,
            description: response.description,
        })
    }

    /// Fetches a full artist page
    pub async fn artist(&self, artist_id: &str) -> Result<ArtistPage> {
        debug!("Fetching artist {}", artist_id);
        let body = json!({ "artist_id": artist_id });
        let response: ArtistResponse = self.post("/artist", body).await?;

        Ok(ArtistPage {
            artist: response.artist,
            sections: response
                .sections
                .into_iter()
                .map(|s| ArtistSection {
                    title: s.title,
                    items: s.items,
                    more: s.more,
                })
                .collect(),
        })
    }

    /// Fetches the first page of a playlist
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistPage> {
        debug!("Fetching playlist {}", playlist_id);
        let body = json!({ "playlist_id": playlist_id });
        let response: PlaylistResponse = self.post("/playlist", body).await?;

        Ok(PlaylistPage {
            playlist: response.playlist,
            songs: response.songs,
            continuation: response.continuation,
        })
    }

    /// Fetches a follow-up page of a playlist's track list
    pub async fn playlist_continuation(
        &self,
        continuation: &str,
    ) -> Result<PlaylistContinuationPage> {
        debug!("Fetching playlist continuation");
        let body = json!({ "continuation": continuation });
        let response: PlaylistContinuationResponse =
            self.post("/playlist/continuation", body).await?;

        Ok(PlaylistContinuationPage {
            songs: response.songs,
            continuation: response.continuation,
        })
    }

    /// Fetches the new-release albums shelf
    pub async fn new_release_albums(&self) -> Result<Vec<AlbumItem>> {
        let page = self
            .browse(&BrowseEndpoint::new(BROWSE_ID_NEW_RELEASES))
            .await?;
        Ok(page
            .items
            .into_iter()
            .filter_map(|item| match item {
                TubeItem::Album(album) => Some(album),
                _ => None,
            })
            .collect())
    }

    fn parse_browse(response: BrowseResponse) -> BrowsePage {
        BrowsePage {
            title: response.title,
            items: response.items,
            continuation: response.continuation,
        }
    }
}
