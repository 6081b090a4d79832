//! Media attachment classification and display ordering.

use crate::core::event_record::{MediaFile, MediaKind};
use crate::util::constants::MEDIA_DISPLAY_ORDER;

/// Classify an uploaded file from its MIME type, falling back to the file
/// extension for office documents and e-books.
pub fn detect_media_kind(mime: &str, file_name: &str) -> MediaKind {
    let mime = mime.trim().to_ascii_lowercase();
    if mime.starts_with("image/") {
        return MediaKind::Photo;
    }
    if mime.starts_with("video/") {
        return MediaKind::Video;
    }
    if mime.starts_with("audio/") {
        return MediaKind::Audio;
    }
    if mime == "application/pdf" {
        return MediaKind::Pdf;
    }

    let ext = std::path::Path::new(file_name.trim())
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => MediaKind::Pdf,
        "doc" | "docx" => MediaKind::Word,
        "xls" | "xlsx" => MediaKind::Excel,
        "epub" => MediaKind::Epub,
        _ => MediaKind::File,
    }
}

/// The event type implied by its attachments: photo if any attachment is
/// a photo, else the first attachment's kind, else text.
pub fn derive_event_kind(media: &[MediaFile]) -> MediaKind {
    if media.iter().any(|m| m.kind == MediaKind::Photo) {
        return MediaKind::Photo;
    }
    media
        .first()
        .map(|m| m.kind.clone())
        .unwrap_or(MediaKind::Text)
}

fn display_rank(kind: &MediaKind) -> usize {
    MEDIA_DISPLAY_ORDER
        .iter()
        .position(|k| *k == kind.as_str())
        .unwrap_or(MEDIA_DISPLAY_ORDER.len())
}

/// Attachments in detail-pane order. Stable within each kind.
pub fn sorted_for_display(media: &[MediaFile]) -> Vec<&MediaFile> {
    let mut out: Vec<&MediaFile> = media.iter().collect();
    out.sort_by_key(|m| display_rank(&m.kind));
    out
}

/// Attachments grouped by kind, groups in display order.
pub fn group_by_kind(media: &[MediaFile]) -> Vec<(MediaKind, Vec<&MediaFile>)> {
    let mut groups: Vec<(MediaKind, Vec<&MediaFile>)> = Vec::new();
    for file in sorted_for_display(media) {
        match groups.last_mut() {
            Some((kind, files)) if *kind == file.kind => files.push(file),
            _ => groups.push((file.kind.clone(), vec![file])),
        }
    }
    groups
}

/// The photo to feature: one named "hero" or "cover", else the first photo.
pub fn hero_photo(media: &[MediaFile]) -> Option<&MediaFile> {
    let mut photos = media.iter().filter(|m| m.kind == MediaKind::Photo);
    let first = photos.clone().next();
    photos
        .find(|m| {
            let name = m.name.to_lowercase();
            name.contains("hero") || name.contains("cover")
        })
        .or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, kind: MediaKind) -> MediaFile {
        MediaFile {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_by_mime() {
        assert_eq!(detect_media_kind("image/png", "a.png"), MediaKind::Photo);
        assert_eq!(detect_media_kind("VIDEO/mp4", "a.mp4"), MediaKind::Video);
        assert_eq!(detect_media_kind("audio/mpeg", "a.mp3"), MediaKind::Audio);
        assert_eq!(detect_media_kind("application/pdf", "a"), MediaKind::Pdf);
    }

    #[test]
    fn test_detect_by_extension() {
        let octet = "application/octet-stream";
        assert_eq!(detect_media_kind(octet, "report.DOCX"), MediaKind::Word);
        assert_eq!(detect_media_kind(octet, "sheet.xls"), MediaKind::Excel);
        assert_eq!(detect_media_kind(octet, "book.epub"), MediaKind::Epub);
        assert_eq!(detect_media_kind(octet, "archive.zip"), MediaKind::File);
        assert_eq!(detect_media_kind("", "noext"), MediaKind::File);
    }

    #[test]
    fn test_derive_event_kind() {
        assert_eq!(derive_event_kind(&[]), MediaKind::Text);
        let media = vec![file("a.pdf", MediaKind::Pdf), file("b.jpg", MediaKind::Photo)];
        assert_eq!(derive_event_kind(&media), MediaKind::Photo);
        let media = vec![file("a.pdf", MediaKind::Pdf), file("b.mp3", MediaKind::Audio)];
        assert_eq!(derive_event_kind(&media), MediaKind::Pdf);
    }

    #[test]
    fn test_display_order_and_groups() {
        let media = vec![
            file("z.zip", MediaKind::File),
            file("a.pdf", MediaKind::Pdf),
            file("1.jpg", MediaKind::Photo),
            file("2.jpg", MediaKind::Photo),
        ];
        let names: Vec<&str> = sorted_for_display(&media).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["1.jpg", "2.jpg", "a.pdf", "z.zip"]);

        let groups = group_by_kind(&media);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, MediaKind::Photo);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_hero_photo() {
        let media = vec![
            file("doc.pdf", MediaKind::Pdf),
            file("stage.jpg", MediaKind::Photo),
            file("Cover-shot.jpg", MediaKind::Photo),
        ];
        assert_eq!(hero_photo(&media).map(|m| m.name.as_str()), Some("Cover-shot.jpg"));
        assert_eq!(hero_photo(&media[..2]).map(|m| m.name.as_str()), Some("stage.jpg"));
        assert!(hero_photo(&media[..1]).is_none());
    }
}
