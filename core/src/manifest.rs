use crate::config::AssetLayout;
use crate::error::GalleryError;
use crate::photo::{build_photos, Photo};

/// Parses `photos.json` (a JSON array of filenames) into display order.
pub fn parse_manifest(
    url: &str,
    raw: &str,
    layout: &AssetLayout,
) -> Result<Vec<Photo>, GalleryError> {
    let files: Vec<String> = serde_json::from_str(raw).map_err(|source| GalleryError::Json {
        url: url.to_string(),
        source,
    })?;
    Ok(build_photos(files, layout))
}

/// Maps a non-success HTTP status to an error.
pub fn check_status(url: &str, ok: bool, status: u16) -> Result<(), GalleryError> {
    if ok {
        Ok(())
    } else {
        Err(GalleryError::Status {
            url: url.to_string(),
            status,
        })
    }
}
