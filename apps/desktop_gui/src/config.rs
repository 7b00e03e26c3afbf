//! Content-pack resolution: CLI path, then environment override, then a
//! local file, then the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use flow_core::ContentPack;
use tracing::info;

const CONTENT_ENV_VAR: &str = "APPLICANT_CONTENT";
const DEFAULT_CONTENT_FILE: &str = "content.toml";

/// Resolves the content pack for this run. An explicitly named file that
/// turns out to be unreadable or invalid is an error, not a silent fall
/// back to the defaults.
pub fn load_content(cli_path: Option<&Path>) -> anyhow::Result<ContentPack> {
    if let Some(path) = cli_path {
        return load_pack_file(path);
    }

    if let Ok(raw) = std::env::var(CONTENT_ENV_VAR) {
        if !raw.trim().is_empty() {
            return load_pack_file(Path::new(&raw));
        }
    }

    let local = PathBuf::from(DEFAULT_CONTENT_FILE);
    if local.exists() {
        return load_pack_file(&local);
    }

    info!("using built-in content pack");
    Ok(ContentPack::builtin())
}

fn load_pack_file(path: &Path) -> anyhow::Result<ContentPack> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read content pack '{}'", path.display()))?;
    let pack = ContentPack::from_toml(&raw)
        .with_context(|| format!("invalid content pack '{}'", path.display()))?;
    info!(path = %path.display(), "loaded content pack");
    Ok(pack)
}
