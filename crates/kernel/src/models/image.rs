//! Gallery image model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A photo in the adventure gallery.
///
/// `likes` is the stored count. Likes given during a session live in
/// [`crate::gallery::LikedSet`] and are added on display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    #[serde(default)]
    pub alt: String,
    pub title: String,
    pub description: String,
    pub likes: u32,
    pub date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
}

impl GalleryImage {
    /// File name offered when the image is downloaded.
    pub fn download_name(&self) -> String {
        let slug = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("kembara-{slug}.jpg")
    }

    /// First `shown` tags and the number of tags left out.
    pub fn tag_preview(&self, shown: usize) -> (&[String], usize) {
        let cut = shown.min(self.tags.len());
        (&self.tags[..cut], self.tags.len() - cut)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn image(title: &str, tags: &[&str]) -> GalleryImage {
        GalleryImage {
            id: 1,
            src: "https://example.org/a.jpg".to_string(),
            alt: String::new(),
            title: title.to_string(),
            description: String::new(),
            likes: 0,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            location: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: String::new(),
        }
    }

    #[test]
    fn download_name_slugs_title() {
        assert_eq!(
            image("Sunrise at  Gunung Ledang", &[]).download_name(),
            "kembara-sunrise-at-gunung-ledang.jpg"
        );
    }

    #[test]
    fn tag_preview_counts_overflow() {
        let img = image("x", &["mountain", "sunrise", "summit"]);
        let (shown, rest) = img.tag_preview(2);
        assert_eq!(shown, ["mountain".to_string(), "sunrise".to_string()]);
        assert_eq!(rest, 1);

        let night = image("y", &["night"]);
        let (shown, rest) = night.tag_preview(2);
        assert_eq!(shown.len(), 1);
        assert_eq!(rest, 0);
    }

    #[test]
    fn date_parses_from_iso_string() {
        let json = serde_json::json!({
            "id": 3,
            "src": "s",
            "title": "Island Adventure",
            "description": "Camping under the stars",
            "likes": 312,
            "date": "2024-02-28",
            "location": "Tioman Island",
            "tags": ["beach"],
            "author": "Chen Wei"
        });
        let img: GalleryImage = serde_json::from_value(json).unwrap();
        assert_eq!(img.date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    }
}
