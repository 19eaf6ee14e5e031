use challenges_core::BadgeUpload;
use std::{fs, io, path::Path};

/// Builds a badge upload from an image on disk, the content type comes from the extension
pub fn badge_upload_from_file(
    path: &Path,
    name: &str,
    tier_id: Option<String>,
) -> Result<BadgeUpload, io::Error> {
    let image = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|file| file.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("badge"));

    Ok(BadgeUpload {
        content_type: get_image_mime_type(&file_name).to_string(),
        file_name,
        image,
        name: name.to_string(),
        tier_id,
    })
}

pub fn get_image_mime_type(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
