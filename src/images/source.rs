use bytes::Bytes;
use reqwest::Client;

use super::error::Error;

/// Bytes named by an upload URI: fetched for http(s), read from disk otherwise.
pub async fn load(client: &Client, uri: &str) -> Result<Bytes, Error> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        debug!("Fetching source {}", uri);
        let bytes = client
            .get(uri)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        return Ok(bytes);
    }
    let path = uri.strip_prefix("file://").unwrap_or(uri);
    debug!("Reading source {}", path);
    let bytes = tokio::fs::read(path).await?;
    Ok(Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_plain_and_file_uris() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"pixels").unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let client = Client::new();

        assert_eq!(load(&client, &path).await.unwrap(), Bytes::from_static(b"pixels"));
        let uri = format!("file://{}", path);
        assert_eq!(load(&client, &uri).await.unwrap(), Bytes::from_static(b"pixels"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = load(&Client::new(), "/definitely/not/here.png").await.unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
