use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use serde_json::Value;

use crate::data::FetchError;

/// Abstract interface for issuing a single GET and reading a JSON body.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// `reqwest`-backed transport. Uses the browser fetch API under wasm32.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Client;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::mpsc,
    };

    use super::{ReqwestTransport, Transport};
    use crate::config::QueryCacheConfig;
    use crate::data::test_support::assets_body;
    use crate::data::{FetchError, FetchState, QueryClient, use_fetch_data};
    use crate::domain::Asset;

    /// Answer every connection with the same canned response. Request heads are
    /// forwarded on the returned channel.
    async fn serve(
        status_line: &'static str,
        body: impl Into<String>,
    ) -> (String, mpsc::UnboundedReceiver<String>) {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = socket.read(&mut chunk).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&chunk[..n]);
                    if head.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}/v2/assets", addr), rx)
    }

    fn local_transport() -> ReqwestTransport {
        ReqwestTransport::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn parses_a_json_body_and_asks_for_json() {
        let (url, mut requests) = serve("HTTP/1.1 200 OK", r#"{"data":[]}"#).await;

        let body = local_transport().get_json(&url).await.unwrap();

        assert_eq!(body["data"], serde_json::json!([]));
        let head = requests.recv().await.unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /v2/assets "));
        assert!(head.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let (url, _requests) = serve("HTTP/1.1 503 Service Unavailable", r#"{"error":"busy"}"#).await;

        let err = local_transport().get_json(&url).await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                url: url.clone(),
                status: 503
            }
        );
    }

    #[tokio::test]
    async fn non_json_body_is_a_body_error() {
        let (url, _requests) = serve("HTTP/1.1 200 OK", "not json").await;

        let err = local_transport().get_json(&url).await.unwrap_err();

        match err {
            FetchError::Body { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("expected a body error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v2/assets", listener.local_addr().unwrap());
        drop(listener);

        let err = local_transport().get_json(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Network { .. }));
    }

    #[tokio::test]
    async fn fetch_handle_loads_assets_over_http() {
        let (url, _requests) = serve("HTTP/1.1 200 OK", assets_body().to_string()).await;
        let client = QueryClient::new(Arc::new(local_transport()), &QueryCacheConfig::default());
        let handle = use_fetch_data::<Vec<Asset>>(client, url);

        handle.fetch().await;

        let names: Vec<_> = handle
            .data()
            .unwrap()
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, ["Bitcoin", "Ethereum"]);
        assert!(handle.error().is_none());
    }

    #[tokio::test]
    async fn fetch_handle_surfaces_http_failures() {
        let (url, _requests) = serve("HTTP/1.1 503 Service Unavailable", "").await;
        let client = QueryClient::new(Arc::new(local_transport()), &QueryCacheConfig::default());
        let handle = use_fetch_data::<Vec<Asset>>(client, url.clone());

        handle.fetch().await;

        assert_eq!(
            handle.state(),
            FetchState::Failed(FetchError::Status { url, status: 503 })
        );
    }
}
