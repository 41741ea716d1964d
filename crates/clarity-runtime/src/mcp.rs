use std::time::Duration;

use serde_json::{json, Value};
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::memory::CallerMemory;
use crate::net::http::{blocking_request, HttpOutcome};
use crate::policy::Effect;
use crate::state::{HostState, McpSession};

const TIMEOUT: Duration = Duration::from_secs(30);

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
    authority.split(':').next().filter(|h| !h.is_empty()).map(str::to_string)
}

/// Issues one JSON-RPC 2.0 request and returns its `result` field as
/// text, whether the server answered with a plain JSON body or an SSE
/// frame (§4.4: "accepting both plain-JSON and SSE-framed responses").
fn json_rpc_call(url: &str, method: &str, params: Value) -> Result<String, String> {
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    })
    .to_string();
    let headers = vec![("content-type".to_string(), "application/json".to_string())];
    match blocking_request("POST", url, headers, Some(body), TIMEOUT) {
        HttpOutcome::Ok(resp) => parse_json_rpc_response(&resp.body),
        HttpOutcome::HttpError(resp) => Err(format!("HTTP {}: {}", resp.status, resp.body)),
        HttpOutcome::NetworkError(e) => Err(e),
        HttpOutcome::Timeout => Err("request timed out".to_string()),
    }
}

fn parse_json_rpc_response(raw: &str) -> Result<String, String> {
    let payload = extract_sse_data(raw).unwrap_or_else(|| raw.to_string());
    let v: Value = serde_json::from_str(&payload).map_err(|e| e.to_string())?;
    if let Some(error) = v.get("error") {
        return Err(error.to_string());
    }
    Ok(v.get("result").cloned().unwrap_or(Value::Null).to_string())
}

/// SSE framing is a sequence of `data: ...` lines; the last one carries
/// the final JSON-RPC payload.
fn extract_sse_data(raw: &str) -> Option<String> {
    if !raw.trim_start().starts_with("data:") && !raw.contains("\ndata:") {
        return None;
    }
    raw.lines()
        .filter_map(|l| l.strip_prefix("data:"))
        .last()
        .map(|s| s.trim().to_string())
}

pub(crate) fn connect(caller: &mut Caller<'_, HostState>, url_ptr: u32) -> RuntimeResult<i64> {
    with_mem(caller, |mem, host| {
        let url = read_string(mem, url_ptr)?;
        if let Err(_e) = host.gate.check(Effect::Mcp, host_of(&url).as_deref()) {
            host.gate.audit(Effect::Mcp, "mcp_connect", "denied", Some(&url), None, None);
            return Ok(0);
        }
        host.gate.audit(Effect::Mcp, "mcp_connect", "ok", Some(&url), None, None);
        let handle = host.alloc_mcp_handle();
        host.mcp_sessions.insert(handle, McpSession { url });
        Ok(handle)
    })
}

pub(crate) fn list_tools(caller: &mut Caller<'_, HostState>, handle: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let Some(session) = host.mcp_sessions.get(&handle) else {
            let ptr = alloc_string(&mut host.allocator, mem, "Unknown MCP session")? as i32;
            return write_narrow_tagged(&mut host.allocator, mem, 1, ptr);
        };
        let url = session.url.clone();
        let result = json_rpc_call(&url, "tools/list", json!({}));
        host.gate.audit(
            Effect::Mcp,
            "mcp_list_tools",
            if result.is_ok() { "ok" } else { "error" },
            Some(&url),
            None,
            Some(&handle.to_string()),
        );
        let (tag, text) = match result {
            Ok(t) => (0, t),
            Err(e) => (1, e),
        };
        let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
        write_narrow_tagged(&mut host.allocator, mem, tag, ptr)
    })
}

pub(crate) fn call_tool(
    caller: &mut Caller<'_, HostState>,
    handle: i64,
    tool_name_ptr: u32,
    args_json_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let tool_name = read_string(mem, tool_name_ptr)?;
        let args_json = read_string(mem, args_json_ptr)?;
        let Some(session) = host.mcp_sessions.get(&handle) else {
            let ptr = alloc_string(&mut host.allocator, mem, "Unknown MCP session")? as i32;
            return write_narrow_tagged(&mut host.allocator, mem, 1, ptr);
        };
        let url = session.url.clone();
        let args: Value = serde_json::from_str(&args_json).unwrap_or(Value::Null);
        let result = json_rpc_call(&url, "tools/call", json!({"name": tool_name, "arguments": args}));
        host.gate.audit(
            Effect::Mcp,
            "mcp_call_tool",
            if result.is_ok() { "ok" } else { "error" },
            Some(&url),
            None,
            Some(&handle.to_string()),
        );
        let (tag, text) = match result {
            Ok(t) => (0, t),
            Err(e) => (1, e),
        };
        let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
        write_narrow_tagged(&mut host.allocator, mem, tag, ptr)
    })
}
