use std::path::PathBuf;

pub const DEFAULT_FRONTEND_DIR: &str = "src/front-jb/www";

/// Directory holding the built frontend (`index.html` + `pkg/`), from FRONTEND_DIR.
pub fn get_frontend_dir() -> PathBuf {
    std::env::var("FRONTEND_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR))
}
