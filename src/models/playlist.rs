//! Playlist models.

use serde::Serialize;

use crate::upstream::{Image, Page, SimplePlaylist};

/// Compact playlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    #[serde(rename = "image")]
    pub image_url: String,
    pub name: String,
    #[serde(rename = "owner_name")]
    pub owner_display_name: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub uri: String,
}

impl From<&SimplePlaylist> for PlaylistSummary {
    fn from(playlist: &SimplePlaylist) -> Self {
        Self {
            image_url: Image::first_url(&playlist.images),
            name: playlist.name.clone(),
            owner_display_name: playlist.owner.display_name.clone(),
            id: playlist.id.clone(),
            uri: playlist.uri.clone(),
        }
    }
}

/// Reduce a page of playlists, keeping upstream order.
pub fn reduce_playlists(page: &Page<SimplePlaylist>) -> Vec<PlaylistSummary> {
    page.items.iter().map(PlaylistSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::PlaylistOwner;

    fn playlist(id: &str, images: &[&str]) -> SimplePlaylist {
        SimplePlaylist {
            id: id.into(),
            name: format!("{id} name"),
            uri: format!("provider:playlist:{id}"),
            images: images.iter().map(|u| Image { url: u.to_string() }).collect(),
            owner: PlaylistOwner {
                display_name: "thomas".into(),
            },
        }
    }

    #[test]
    fn test_empty_page() {
        let reduced = reduce_playlists(&Page::default());
        assert!(reduced.is_empty());
        assert_eq!(serde_json::to_string(&reduced).unwrap(), "[]");
    }

    #[test]
    fn test_playlist_without_images() {
        let summary = PlaylistSummary::from(&playlist("p1", &[]));
        assert_eq!(summary.image_url, "");
    }

    #[test]
    fn test_playlist_uses_first_image() {
        let summary = PlaylistSummary::from(&playlist("p1", &["big", "medium", "small"]));
        assert_eq!(summary.image_url, "big");
    }

    #[test]
    fn test_order_preserved() {
        let page = Page {
            items: vec![playlist("b", &[]), playlist("a", &[]), playlist("c", &[])],
            total: 3,
        };
        let ids: Vec<String> = reduce_playlists(&page).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_summary_json() {
        let json = serde_json::to_string(&PlaylistSummary::from(&playlist("p1", &["url"]))).unwrap();
        assert_eq!(
            json,
            r#"{"image":"url","name":"p1 name","owner_name":"thomas","ID":"p1","uri":"provider:playlist:p1"}"#
        );
    }
}
