use async_trait::async_trait;

use business::domain::image::errors::ImageError;
use business::domain::image::services::ImageSourceService;

/// Reads the bytes behind a locally picked file, accepting both plain
/// paths and `file://` URIs.
pub struct LocalFileSource;

#[async_trait]
impl ImageSourceService for LocalFileSource {
    async fn read(&self, uri: &str) -> Result<Vec<u8>, ImageError> {
        let path = uri.strip_prefix("file://").unwrap_or(uri);

        tokio::fs::read(path)
            .await
            .map_err(|_| ImageError::SourceUnreadable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fail_with_source_unreadable_for_missing_file() {
        let source = LocalFileSource;
        let result = source.read("/nonexistent/picked.jpg").await;
        assert!(matches!(result.unwrap_err(), ImageError::SourceUnreadable));
    }

    #[tokio::test]
    async fn should_read_existing_file() {
        let dir = std::env::temp_dir().join("object-storage-file-source-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("picked.jpg");
        std::fs::write(&path, b"jpeg-bytes").unwrap();

        let source = LocalFileSource;
        let uri = format!("file://{}", path.display());
        let bytes = source.read(&uri).await.unwrap();

        assert_eq!(bytes, b"jpeg-bytes");
    }
}
