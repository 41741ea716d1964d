use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Request;
use tokio::net::TcpStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

/// Upper bound on a response body, per spec.md §5's shared-buffer layout
/// ("a fixed upper-bound body buffer (8 MiB)"). Responses are truncated at
/// this size rather than grown without bound.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Grace period added on top of the caller's deadline before a request is
/// treated as timed out (spec.md §5: "times out after the configured
/// deadline plus a 2-second grace period").
const TIMEOUT_GRACE: Duration = Duration::from_secs(2);

const MAX_REDIRECTS: u32 = 5;

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub enum HttpOutcome {
    Ok(HttpResponse),
    HttpError(HttpResponse),
    NetworkError(String),
    Timeout,
}

/// Performs one HTTP request on a disposable worker thread and blocks the
/// calling (host) thread until it completes or the deadline (plus grace)
/// elapses (spec.md §5: "cooperative on the main host thread plus one
/// disposable worker per blocking I/O call"). A channel recv with timeout
/// is this crate's Rust-idiomatic stand-in for the spec's shared
/// control-word/futex handshake — see DESIGN.md.
pub fn blocking_request(
    method: &str,
    url: &str,
    headers: Vec<(String, String)>,
    body: Option<String>,
    timeout: Duration,
) -> HttpOutcome {
    if let Some(path) = url.strip_prefix("file://") {
        return match std::fs::read_to_string(path) {
            Ok(contents) => HttpOutcome::Ok(HttpResponse {
                status: 200,
                body: contents,
            }),
            Err(e) => HttpOutcome::NetworkError(e.to_string()),
        };
    }

    let (tx, rx) = mpsc::channel();
    let method = method.to_string();
    let url = url.to_string();
    thread::spawn(move || {
        let outcome = run_with_redirects(&method, &url, &headers, body, MAX_REDIRECTS);
        let _ = tx.send(outcome);
    });

    match rx.recv_timeout(timeout + TIMEOUT_GRACE) {
        Ok(outcome) => outcome,
        Err(_) => HttpOutcome::Timeout,
    }
}

fn run_with_redirects(
    method: &str,
    url: &str,
    headers: &[(String, String)],
    body: Option<String>,
    redirects_left: u32,
) -> HttpOutcome {
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => return HttpOutcome::NetworkError(e.to_string()),
    };
    rt.block_on(async move {
        let mut url = url.to_string();
        let mut redirects_left = redirects_left;
        loop {
            match send_once(method, &url, headers, body.clone()).await {
                Ok((status, location, resp_body)) => {
                    let is_redirect = matches!(status, 301 | 302 | 303 | 307 | 308)
                        && method.eq_ignore_ascii_case("GET");
                    if is_redirect && redirects_left > 0 {
                        if let Some(next) = location {
                            url = resolve_location(&url, &next);
                            redirects_left -= 1;
                            continue;
                        }
                    }
                    if (200..400).contains(&status) {
                        return HttpOutcome::Ok(HttpResponse { status, body: resp_body });
                    }
                    return HttpOutcome::HttpError(HttpResponse { status, body: resp_body });
                }
                Err(e) => return HttpOutcome::NetworkError(e),
            }
        }
    })
}

fn resolve_location(base: &str, location: &str) -> String {
    if location.starts_with("http://") || location.starts_with("https://") {
        location.to_string()
    } else if let Some(scheme_end) = base.find("://") {
        let (scheme, rest) = base.split_at(scheme_end + 3);
        let authority_end = rest.find('/').unwrap_or(rest.len());
        format!("{scheme}{}{}", &rest[..authority_end], location)
    } else {
        location.to_string()
    }
}

async fn send_once(
    method: &str,
    url: &str,
    headers: &[(String, String)],
    body: Option<String>,
) -> Result<(u16, Option<String>, String), String> {
    let parsed: http::Uri = url.parse().map_err(|e: http::uri::InvalidUri| e.to_string())?;
    let scheme = parsed.scheme_str().unwrap_or("https");
    let host = parsed.host().ok_or("request URL has no host")?.to_string();
    let port = parsed
        .port_u16()
        .unwrap_or(if scheme == "https" { 443 } else { 80 });
    let path = parsed
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();

    let tcp = TcpStream::connect((host.as_str(), port))
        .await
        .map_err(|e| e.to_string())?;

    let mut builder = Request::builder().method(method).uri(path).header("host", &host);
    for (k, v) in headers {
        builder = builder.header(k.as_str(), v.as_str());
    }
    let req_body = body.unwrap_or_default();
    let request = builder
        .body(Full::new(Bytes::from(req_body)))
        .map_err(|e| e.to_string())?;

    if scheme == "https" {
        let connector = tls_connector();
        let server_name = ServerName::try_from(host.clone()).map_err(|e| e.to_string())?;
        let tls_stream = connector
            .connect(server_name, tcp)
            .await
            .map_err(|e| e.to_string())?;
        exchange(tls_stream, request).await
    } else {
        exchange(tcp, request).await
    }
}

async fn exchange<S>(
    stream: S,
    request: Request<Full<Bytes>>,
) -> Result<(u16, Option<String>, String), String>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + 'static,
{
    let io = hyper_util::rt::TokioIo::new(stream);
    let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
        .await
        .map_err(|e| e.to_string())?;
    tokio::spawn(async move {
        let _ = conn.await;
    });
    let response = sender.send_request(request).await.map_err(|e| e.to_string())?;
    let status = response.status().as_u16();
    let location = response
        .headers()
        .get(hyper::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let collected = response
        .into_body()
        .collect()
        .await
        .map_err(|e| e.to_string())?
        .to_bytes();
    let truncated = &collected[..collected.len().min(MAX_BODY_BYTES)];
    let body = String::from_utf8_lossy(truncated).into_owned();
    Ok((status, location, body))
}

fn tls_connector() -> TlsConnector {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    TlsConnector::from(Arc::new(config))
}
