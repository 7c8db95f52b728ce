use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub album: Album,
    pub artists: Vec<Artist>,
    #[serde(rename = "duration_ms", default)]
    pub duration_ms: i64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(rename = "external_urls", default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(rename = "is_local", default)]
    pub is_local: bool,
}

impl Track {
    /// Artist names in credit order, comma separated.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(rename = "album_type", default)]
    pub album_type: String,
    #[serde(rename = "external_urls", default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    #[serde(rename = "release_date", default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub uri: String,
}

impl Album {
    /// First image whose height is exactly `height` pixels.
    pub fn image_with_height(&self, height: u32) -> Option<&Image> {
        self.images.iter().find(|image| image.height == Some(height))
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(rename = "external_urls", default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub uri: String,
}
