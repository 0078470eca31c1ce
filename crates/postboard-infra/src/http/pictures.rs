//! Remote picture listing over HTTP.

use async_trait::async_trait;
use reqwest::{Client, Url};

use postboard_core::domain::PostPicture;
use postboard_core::ports::{FetchError, PictureSource};

use super::InvalidUrl;

/// Picture listing endpoint configuration.
#[derive(Debug, Clone)]
pub struct PictureSourceConfig {
    /// Base path the `list` resource hangs off.
    pub base_url: String,
}

impl Default for PictureSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://picsum.photos/v2/".to_string(),
        }
    }
}

/// `GET <base>/list`, decoded into [`PostPicture`]s. No retries, no paging.
pub struct HttpPictureSource {
    client: Client,
    list_url: Url,
}

impl HttpPictureSource {
    pub fn new(client: Client, config: &PictureSourceConfig) -> Result<Self, InvalidUrl> {
        // Url::join drops the last segment unless the base ends with '/'
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let list_url = Url::parse(&base)
            .and_then(|base| base.join("list"))
            .map_err(|e| InvalidUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, list_url })
    }

    pub fn list_url(&self) -> &Url {
        &self.list_url
    }
}

#[async_trait]
impl PictureSource for HttpPictureSource {
    async fn fetch_pictures(&self) -> Result<Vec<PostPicture>, FetchError> {
        tracing::debug!(url = %self.list_url, "Requesting picture list");

        let response = self
            .client
            .get(self.list_url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server::{serve_once, test_client};

    fn source_for(base_url: String) -> HttpPictureSource {
        HttpPictureSource::new(test_client(), &PictureSourceConfig { base_url }).unwrap()
    }

    #[test]
    fn test_list_url_joins_base_path() {
        let source = source_for("https://picsum.photos/v2".to_string());
        assert_eq!(source.list_url().as_str(), "https://picsum.photos/v2/list");

        let source = source_for("https://picsum.photos/v2/".to_string());
        assert_eq!(source.list_url().as_str(), "https://picsum.photos/v2/list");
    }

    #[test]
    fn test_unparsable_base_is_invalid_url() {
        let err = HttpPictureSource::new(
            test_client(),
            &PictureSourceConfig {
                base_url: "not a url".to_string(),
            },
        )
        .err()
        .unwrap();

        assert_eq!(err.url, "not a url");
        assert!(err.to_string().starts_with("invalid URL"));
    }

    #[tokio::test]
    async fn test_fetch_decodes_listing() {
        let body = r#"[{"id":"0","author":"Alejandro Escamilla","width":5000,"height":3333,
            "url":"https://unsplash.com/photos/yC-Yzbqy7PY",
            "download_url":"https://picsum.photos/id/0/5000/3333"}]"#;
        let (base, request) = serve_once(200, body).await;

        let pictures = source_for(base).fetch_pictures().await.unwrap();

        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].author, "Alejandro Escamilla");
        assert_eq!(pictures[0].width, 5000);
        assert_eq!(
            pictures[0].download_url,
            "https://picsum.photos/id/0/5000/3333"
        );
        assert!(request.await.unwrap().head.starts_with("GET /list "));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_failure() {
        let (base, _request) = serve_once(503, "{}").await;

        let err = source_for(base).fetch_pictures().await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 503 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_failure() {
        let (base, _request) = serve_once(200, r#"{"unexpected":"shape"}"#).await;

        let err = source_for(base).fetch_pictures().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(format!("http://{addr}/"))
            .fetch_pictures()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
