use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use eyre::Result;
use eyre::WrapErr;

/// Read the logo and return it base64 encoded.
///
/// A missing or unreadable logo fails the request.
pub async fn read_logo(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .wrap_err_with(|| format!("Failed to read logo at {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}
