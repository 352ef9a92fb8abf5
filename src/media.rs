//! Static demo media catalog.
//!
//! A fixed list of sample clips used to give the demo timeline a length and
//! something to show beside the ruler. There is no asset management here.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Metadata for one demo clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaAsset {
    pub id: &'static str,
    pub title: &'static str,
    pub src: &'static str,
    pub thumbnail: &'static str,
    pub duration_ms: u64,
    pub frame_rate: f32,
}

static DEMO_MEDIA: Lazy<Vec<MediaAsset>> = Lazy::new(|| {
    vec![
        MediaAsset {
            id: "big-buck-bunny",
            title: "Big Buck Bunny",
            src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            thumbnail: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/BigBuckBunny.jpg",
            duration_ms: 596_000,
            frame_rate: 24.0,
        },
        MediaAsset {
            id: "elephants-dream",
            title: "Elephants Dream",
            src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            thumbnail: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/ElephantsDream.jpg",
            duration_ms: 653_000,
            frame_rate: 24.0,
        },
        MediaAsset {
            id: "for-bigger-blazes",
            title: "For Bigger Blazes",
            src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            thumbnail: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/ForBiggerBlazes.jpg",
            duration_ms: 15_000,
            frame_rate: 30.0,
        },
        MediaAsset {
            id: "sintel",
            title: "Sintel",
            src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
            thumbnail: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/Sintel.jpg",
            duration_ms: 888_000,
            frame_rate: 24.0,
        },
        MediaAsset {
            id: "tears-of-steel",
            title: "Tears of Steel",
            src: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4",
            thumbnail: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/TearsOfSteel.jpg",
            duration_ms: 734_000,
            frame_rate: 24.0,
        },
    ]
});

/// Returns the demo catalog.
pub fn demo_media() -> &'static [MediaAsset] {
    &DEMO_MEDIA
}

/// Looks up a demo clip by id.
pub fn find_media(id: &str) -> Option<&'static MediaAsset> {
    DEMO_MEDIA.iter().find(|asset| asset.id == id)
}

/// Total length of the catalog laid end to end.
pub fn catalog_duration_ms() -> u64 {
    DEMO_MEDIA.iter().map(|asset| asset.duration_ms).sum()
}

/// Serializes the catalog as pretty JSON.
pub fn catalog_json() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(demo_media())?)
}
