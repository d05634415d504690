use std::path::Path;

use chrono::NaiveDate;
use uuid::Uuid;

use super::errors::MediaError;
use crate::domain::catalog::model::MediaType;
use crate::domain::shared::value_objects::UserId;

pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "video/mp4",
    "video/mpeg",
];

/// Per-file ceiling: 10 MiB.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Checks a file against the upload policy and returns its media type.
pub fn validate_upload(content_type: &str, size: usize) -> Result<MediaType, MediaError> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(MediaError::UnsupportedType);
    }
    if size == 0 {
        return Err(MediaError::EmptyFile);
    }
    if size > MAX_FILE_SIZE {
        return Err(MediaError::TooLarge);
    }
    MediaType::from_mime(&mime).ok_or(MediaError::UnsupportedType)
}

const KEY_ROOT: &str = "media";
const FILE_PREFIX: &str = "vuata";

/// Folder holding every object uploaded by `owner`: `media/<owner>/`.
///
/// Characters outside `[A-Za-z0-9_-]` become `_` so the uid cannot climb out
/// of its folder.
pub fn owner_prefix(owner: &UserId) -> String {
    let folder: String = owner
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{KEY_ROOT}/{folder}/")
}

/// True when `key` lies directly inside the owner's folder.
pub fn is_owned_by(key: &str, owner: &UserId) -> bool {
    key.strip_prefix(&owner_prefix(owner))
        .is_some_and(|name| !name.is_empty() && !name.contains('/'))
}

/// Builds a collision resistant object key:
/// `media/<owner>/vuata_<date>_<uuid><.ext>`.
pub fn object_key(owner: &UserId, file_name: &str, date: NaiveDate, unique_id: Uuid) -> String {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!(
        "{}{FILE_PREFIX}_{}_{}{}",
        owner_prefix(owner),
        date.format("%Y-%m-%d"),
        unique_id,
        extension
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub url: String,
    pub media_type: MediaType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn should_accept_allowed_image() {
        assert_eq!(validate_upload("image/png", 1024).unwrap(), MediaType::Image);
    }

    #[test]
    fn should_accept_mime_with_parameters() {
        assert_eq!(
            validate_upload("Video/MP4; codecs=avc1", 1024).unwrap(),
            MediaType::Video
        );
    }

    #[test]
    fn should_reject_unlisted_mime_type() {
        assert!(matches!(
            validate_upload("image/webp", 1024),
            Err(MediaError::UnsupportedType)
        ));
        assert!(matches!(
            validate_upload("application/pdf", 1024),
            Err(MediaError::UnsupportedType)
        ));
    }

    #[test]
    fn should_reject_file_over_ceiling() {
        assert!(matches!(
            validate_upload("image/jpeg", MAX_FILE_SIZE + 1),
            Err(MediaError::TooLarge)
        ));
        assert!(validate_upload("image/jpeg", MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn should_reject_empty_file() {
        assert!(matches!(
            validate_upload("image/gif", 0),
            Err(MediaError::EmptyFile)
        ));
    }

    #[test]
    fn should_build_owner_scoped_key_with_extension() {
        let id = Uuid::nil();
        assert_eq!(
            object_key(&UserId::new("seller-1"), "Photo.JPG", date(), id),
            "media/seller-1/vuata_2026-03-07_00000000-0000-0000-0000-000000000000.jpg"
        );
    }

    #[test]
    fn should_drop_missing_or_odd_extension() {
        let id = Uuid::nil();
        let owner = UserId::new("seller-1");
        assert_eq!(
            object_key(&owner, "photo", date(), id),
            "media/seller-1/vuata_2026-03-07_00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            object_key(&owner, "clip.m p4", date(), id),
            "media/seller-1/vuata_2026-03-07_00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn should_keep_path_characters_out_of_owner_folder() {
        assert_eq!(owner_prefix(&UserId::new("../admin")), "media/___admin/");
    }

    #[test]
    fn should_recognise_only_keys_in_own_folder() {
        let owner = UserId::new("seller-1");
        let key = object_key(&owner, "a.png", date(), Uuid::nil());

        assert!(is_owned_by(&key, &owner));
        assert!(!is_owned_by(&key, &UserId::new("seller-2")));
        assert!(!is_owned_by(&key, &UserId::new("seller")));
        assert!(!is_owned_by("media/seller-1/", &owner));
        assert!(!is_owned_by("media/seller-1/nested/a.png", &owner));
        assert!(!is_owned_by("media/vuata_2026-03-07_x.png", &owner));
    }
}
