pub(crate) mod http;
pub(crate) mod llm;
pub(crate) mod stream;

use std::time::Duration;

use serde_json::Value;
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::memory::CallerMemory;
use crate::state::HostState;
use http::{blocking_request, HttpOutcome};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

fn with_mem<T>(
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut CallerMemory<'_, '_>, &mut HostState) -> RuntimeResult<T>,
) -> RuntimeResult<T> {
    let state = caller.data_mut() as *mut HostState;
    // SAFETY: see `maps::with_mem`.
    let host = unsafe { &mut *state };
    let mut mem = CallerMemory::new(caller);
    f(&mut mem, host)
}

fn host_of(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let authority = without_scheme.split(['/', '?', '#']).next().unwrap_or(without_scheme);
    let host = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    host.split(':').next().filter(|h| !h.is_empty()).map(str::to_string)
}

/// Every synchronous HTTP primitive funnels through here: a single policy
/// check, the blocking request, one audit record, and the
/// `Result<String, String>` encoding shared by all three (§4.4
/// "Network" — "All three return Result⟨String, String⟩").
fn perform(
    host: &mut HostState,
    mem: &mut CallerMemory<'_, '_>,
    op: &str,
    method: &str,
    url: &str,
    headers: Vec<(String, String)>,
    body: Option<String>,
) -> RuntimeResult<u32> {
    let started = std::time::Instant::now();
    if let Err(e) = host.gate.check_network_host(host_of(url).as_deref()) {
        host.gate.audit_network(op, "denied", Some(url), None);
        let ptr = alloc_string(&mut host.allocator, mem, &e.to_string())? as i32;
        return write_narrow_tagged(&mut host.allocator, mem, 1, ptr);
    }
    let outcome = blocking_request(method, url, headers, body, DEFAULT_TIMEOUT);
    let duration_ms = started.elapsed().as_millis() as u64;
    let (ok, text) = match outcome {
        HttpOutcome::Ok(resp) => (true, resp.body),
        HttpOutcome::HttpError(resp) => (false, format!("HTTP {}: {}", resp.status, resp.body)),
        HttpOutcome::NetworkError(e) => (false, e),
        HttpOutcome::Timeout => (false, "request timed out".to_string()),
    };
    host.gate.audit_network(
        op,
        if ok { "ok" } else { "error" },
        Some(url),
        Some(duration_ms),
    );
    let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
    write_narrow_tagged(&mut host.allocator, mem, if ok { 0 } else { 1 }, ptr)
}

pub(crate) fn get(caller: &mut Caller<'_, HostState>, url_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let url = read_string(mem, url_ptr)?;
        perform(host, mem, "http_get", "GET", &url, vec![], None)
    })
}

pub(crate) fn post(caller: &mut Caller<'_, HostState>, url_ptr: u32, body_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let url = read_string(mem, url_ptr)?;
        let body = read_string(mem, body_ptr)?;
        perform(host, mem, "http_post", "POST", &url, vec![], Some(body))
    })
}

pub(crate) fn request(
    caller: &mut Caller<'_, HostState>,
    method_ptr: u32,
    url_ptr: u32,
    headers_ptr: u32,
    body_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let method = read_string(mem, method_ptr)?;
        let url = read_string(mem, url_ptr)?;
        let headers_json = read_string(mem, headers_ptr)?;
        let body = read_string(mem, body_ptr)?;
        let headers = match serde_json::from_str::<Value>(&headers_json) {
            Ok(Value::Object(obj)) => obj
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect(),
            _ => Vec::new(),
        };
        perform(host, mem, "http_request", &method, &url, headers, Some(body))
    })
}
