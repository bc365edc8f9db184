use anyhow::{Context, Result};
use crux_http::HttpError;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use dawndoor_ui_core::BASE_URL;
use reqwest::{Client, Method};
use std::time::Duration;

/// Create the client used for all device requests
///
/// The device sits on the local network, so proxies from the environment are ignored.
pub fn device_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .context("failed to create device HTTP client")
}

/// Map a core URL onto the configured device origin
///
/// The core addresses resources relative to a placeholder origin; anything else is sent as is.
///
/// # Examples
/// ```
/// use dawndoor_panel::http_client::device_url;
///
/// assert_eq!(
///     device_url("http://192.168.4.1", "https://relative/door"),
///     "http://192.168.4.1/door"
/// );
/// ```
pub fn device_url(origin: &str, url: &str) -> String {
    match url.strip_prefix(BASE_URL) {
        Some(path) => format!("{origin}{path}"),
        None => url.to_string(),
    }
}

/// Perform an HTTP effect and report the outcome in the core's terms
///
/// Any status code is a response; only transport problems become errors.
pub async fn execute(client: &Client, origin: &str, request: &HttpRequest) -> HttpResult {
    match send(client, origin, request).await {
        Ok(response) => HttpResult::Ok(response),
        Err(e) => HttpResult::Err(e),
    }
}

async fn send(client: &Client, origin: &str, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
    let method = Method::from_bytes(request.method.as_bytes())
        .map_err(|e| HttpError::Url(format!("invalid method {}: {e}", request.method)))?;
    let url = device_url(origin, &request.url);

    log::debug!("{method} {url}");

    let mut builder = client.request(method, &url);
    for header in &request.headers {
        builder = builder.header(header.name.as_str(), header.value.as_str());
    }

    let response = builder
        .body(request.body.clone())
        .send()
        .await
        .map_err(transport_error)?;
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(transport_error)?;

    Ok(HttpResponse::status(status).body(body.to_vec()).build())
}

fn transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_resolve_against_origin() {
        assert_eq!(
            device_url("http://10.0.0.2", "https://relative/network"),
            "http://10.0.0.2/network"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            device_url("http://10.0.0.2", "http://example.com/door"),
            "http://example.com/door"
        );
    }

    #[tokio::test]
    async fn unreachable_device_is_an_io_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let origin = format!("http://{}", listener.local_addr().expect("addr"));
        drop(listener);

        let client = device_client(Duration::from_secs(2)).expect("client");
        let request = HttpRequest {
            method: "GET".to_string(),
            url: format!("{BASE_URL}/door"),
            headers: vec![],
            body: vec![],
        };

        let result = execute(&client, &origin, &request).await;

        assert!(matches!(result, HttpResult::Err(HttpError::Io(_))));
    }
}
