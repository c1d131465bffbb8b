//! HTTP submission to the order intake API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::debug;

use crate::error::SinkError;
use crate::models::config::ApiConfig;

use super::OrderSink;

fn transport(e: reqwest::Error) -> SinkError {
    SinkError::Transport(Box::new(e))
}

/// Posts order JSON to the intake API with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpOrderSink {
    client: Client,
}

impl HttpOrderSink {
    /// Build a sink from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, SinkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(transport)?;
        Ok(Self { client })
    }

    fn parse_destination(destination: &str) -> Result<Url, SinkError> {
        let url = Url::parse(destination)
            .map_err(|e| SinkError::InvalidDestination(format!("{}: {}", destination, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(SinkError::InvalidDestination(format!(
                "{}: unsupported scheme '{}'",
                destination, scheme
            ))),
        }
    }
}

impl OrderSink for HttpOrderSink {
    fn submit(&self, order_json: &str, destination: &str) -> Result<(), SinkError> {
        let url = Self::parse_destination(destination)?;

        debug!("Submitting order to {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(order_json.to_string())
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SinkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Order accepted with status {}", status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve a single canned response and hand back the raw request.
    fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/orders", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request = String::new();
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
                request.push_str(&line);
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }

            let mut body = vec![0; content_length];
            reader.read_exact(&mut body).unwrap();
            request.push_str(&String::from_utf8(body).unwrap());

            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });

        (url, handle)
    }

    fn sink() -> HttpOrderSink {
        HttpOrderSink::new(&ApiConfig {
            timeout_secs: 2,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_malformed_destination() {
        let err = sink().submit("{}", "not a url").unwrap_err();
        assert!(matches!(err, SinkError::InvalidDestination(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = sink().submit("{}", "ftp://example.com/orders").unwrap_err();
        assert!(matches!(err, SinkError::InvalidDestination(msg) if msg.contains("ftp")));
    }

    #[test]
    fn test_unreachable_destination_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/orders", listener.local_addr().unwrap());
        drop(listener);

        let err = sink().submit("{}", &url).unwrap_err();
        assert!(matches!(err, SinkError::Transport(_)));
    }

    #[test]
    fn test_posts_order_json() {
        let (url, handle) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let order_json = r#"{"device":"Wheelchair","maskType":null}"#;

        sink().submit(order_json, &url).unwrap();

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /orders "));
        assert!(request.to_lowercase().contains("content-type: application/json\r\n"));
        assert!(request.ends_with(&format!("\r\n\r\n{}", order_json)));
    }

    #[test]
    fn test_non_success_status_is_reported() {
        let (url, handle) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbusy",
        );

        let err = sink().submit(r#"{"a":1}"#, &url).unwrap_err();
        handle.join().unwrap();

        assert!(matches!(
            err,
            SinkError::Status { status: 503, ref body } if body == "busy"
        ));
    }
}
