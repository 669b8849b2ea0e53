//! Static asset and single-page-application fallback service.
//!
//! In production the API process also serves the prebuilt frontend bundle:
//! unmatched paths are first checked against the static directory, and
//! anything still unmatched gets the bundle's `index.html` with success
//! status so client-side routing can take over. Outside production this
//! service is never installed and unmatched requests get a plain 404.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Build the production fallback service for `static_dir`.
pub fn frontend_service(static_dir: &Path) -> ServeDir<ServeFile> {
    let index = ServeFile::new(static_dir.join("index.html"));
    ServeDir::new(static_dir).fallback(index)
}
