use crate::error::AssetError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Read the whole asset into memory
pub async fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    tokio::fs::read(path).await.map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the asset and encode it as padded standard base64
pub async fn load_base64(path: &Path) -> Result<String, AssetError> {
    let bytes = read_asset(path).await?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[tokio::test]
    async fn test_encodes_png_signature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signature.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00]).unwrap();

        let encoded = load_base64(&path).await.unwrap();
        assert_eq!(encoded, "iVBORw0KGgoAAA==");
    }

    #[tokio::test]
    async fn test_empty_file_encodes_to_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        assert_eq!(load_base64(&path).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = load_base64(&path).await.unwrap_err();
        let AssetError::Read { path: failed, source } = &err;
        assert_eq!(failed, &path);
        assert_eq!(source.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.png"));
    }

    #[tokio::test]
    async fn test_directory_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_asset(dir.path()).await.is_err());
    }
}
