//! Embedded static assets for single-binary distribution
//!
//! Uses rust-embed to compile the viewer stylesheet into the binary.

use rust_embed::RustEmbed;

/// Embedded static assets from the assets/ directory
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.css"]
pub struct StaticAssets;

/// Get a file from embedded assets with proper MIME type
pub fn get_asset(path: &str) -> Option<(Vec<u8>, &'static str)> {
    let path = path.trim_start_matches('/');

    StaticAssets::get(path).map(|file| {
        let mime = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");
        (file.data.into_owned(), mime)
    })
}
