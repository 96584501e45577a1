//! Native client for the monitoring endpoint.
//!
//! One `GET`, no query parameters, no retry: the dashboard fetches the full
//! record set once and filters it locally.

use crate::error::{LrmError, Result};
use crate::record::Record;
use log::{error, info};
use reqwest::Client;

/// Fetch every record from `url` in a single attempt.
///
/// A transport error, a non-success status and an undecodable body are all
/// returned as errors; callers that present them to a user collapse them
/// into one message.
pub async fn fetch_records(client: &Client, url: &str) -> Result<Vec<Record>> {
    info!("Fetching monitoring records from {}", url);

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        LrmError::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        error!("Bad response status from {}: {}", url, status);
        return Err(LrmError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await?;
    let records = Record::parse_records(&body).map_err(|e| {
        error!("Failed to decode response from {}: {}", url, e);
        e
    })?;

    info!("Fetched {} records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a loopback port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/api/landslide-risk", addr)
    }

    #[tokio::test]
    async fn test_fetch_records_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"regionName":"Penang","rainfallLevel":120,"soilSaturation":88,"slopeAngle":35,"calculatedRiskLevel":"Moderate","timestamp":"2025-08-04"}]"#,
        )
        .await;
        let records = fetch_records(&Client::new(), &url).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region_name, "Penang");
    }

    #[tokio::test]
    async fn test_fetch_records_non_success_status() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "[]").await;
        let err = fetch_records(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, LrmError::HttpStatus(503)));
    }

    #[tokio::test]
    async fn test_fetch_records_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await;
        let err = fetch_records(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, LrmError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_records_connection_refused() {
        // Bind then drop to get a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = fetch_records(&Client::new(), &format!("http://{}/", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, LrmError::HttpRequest(_)));
    }
}
