//! schema.org structured data for the watch page.

use serde_json::{json, Value};

use crate::types::Timestamp;

/// Inputs for building a `VideoObject` JSON-LD document.
#[derive(Debug, Clone)]
pub struct VideoMeta<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub thumbnail_url: Option<&'a str>,
    pub video_url: &'a str,
    pub slug: &'a str,
    pub uploaded_at: Timestamp,
}

/// Build the schema.org `VideoObject` JSON-LD block for a watch page.
///
/// `base_url` is the public origin (no trailing slash); `site_name` is the
/// publisher shown to search engines. When the video has no description a
/// generic "Watch {title} online" line is substituted so the field is never
/// empty.
pub fn video_json_ld(meta: &VideoMeta<'_>, base_url: &str, site_name: &str) -> Value {
    let description = match meta.description {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format!("Watch {} online on {site_name}.", meta.title),
    };

    json!({
        "@context": "https://schema.org",
        "@type": "VideoObject",
        "name": meta.title,
        "description": description,
        "thumbnailUrl": meta.thumbnail_url.map(|t| vec![t]).unwrap_or_default(),
        "uploadDate": meta.uploaded_at.to_rfc3339(),
        "contentUrl": meta.video_url,
        "embedUrl": format!("{base_url}/watch/{}", meta.slug),
        "publisher": {
            "@type": "Organization",
            "name": site_name,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{base_url}/logo.png"),
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta() -> VideoMeta<'static> {
        VideoMeta {
            title: "Spring Drama EP 1",
            description: Some("First episode."),
            thumbnail_url: Some("https://cdn.example.com/t/1.jpg"),
            video_url: "https://cdn.example.com/v/1.mp4",
            slug: "spring-drama-ep-1",
            uploaded_at: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn builds_video_object() {
        let doc = video_json_ld(&meta(), "https://vodboard.example", "Vodboard");
        assert_eq!(doc["@type"], "VideoObject");
        assert_eq!(doc["name"], "Spring Drama EP 1");
        assert_eq!(doc["description"], "First episode.");
        assert_eq!(
            doc["embedUrl"],
            "https://vodboard.example/watch/spring-drama-ep-1"
        );
        assert_eq!(doc["publisher"]["name"], "Vodboard");
    }

    #[test]
    fn missing_description_gets_fallback_copy() {
        let mut m = meta();
        m.description = None;
        let doc = video_json_ld(&m, "https://vodboard.example", "Vodboard");
        assert_eq!(
            doc["description"],
            "Watch Spring Drama EP 1 online on Vodboard."
        );
    }

    #[test]
    fn missing_thumbnail_serializes_as_empty_list() {
        let mut m = meta();
        m.thumbnail_url = None;
        let doc = video_json_ld(&m, "https://vodboard.example", "Vodboard");
        assert!(doc["thumbnailUrl"].as_array().unwrap().is_empty());
    }
}
