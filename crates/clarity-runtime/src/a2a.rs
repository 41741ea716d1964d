use std::time::Duration;

use rand::Rng;
use serde_json::{json, Value};
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::memory::CallerMemory;
use crate::net::http::{blocking_request, HttpOutcome};
use crate::policy::Effect;
use crate::state::HostState;

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

fn json_rpc_call(url: &str, method: &str, params: Value) -> Result<String, String> {
    let body = json!({ "jsonrpc": "2.0", "id": 1, "method": method, "params": params }).to_string();
    let headers = vec![("content-type".to_string(), "application/json".to_string())];
    match blocking_request("POST", url, headers, Some(body), TIMEOUT) {
        HttpOutcome::Ok(resp) => {
            let v: Value = serde_json::from_str(&resp.body).map_err(|e| e.to_string())?;
            if let Some(error) = v.get("error") {
                return Err(error.to_string());
            }
            Ok(v.get("result").cloned().unwrap_or(Value::Null).to_string())
        }
        HttpOutcome::HttpError(resp) => Err(format!("HTTP {}: {}", resp.status, resp.body)),
        HttpOutcome::NetworkError(e) => Err(e),
        HttpOutcome::Timeout => Err("request timed out".to_string()),
    }
}

fn gated_get(host: &mut HostState, op: &str, url: &str) -> Result<String, String> {
    host.gate
        .check(Effect::A2a, host_of(url).as_deref())
        .map_err(|e| e.to_string())?;
    let outcome = blocking_request("GET", url, vec![], None, TIMEOUT);
    let result = match outcome {
        HttpOutcome::Ok(resp) => Ok(resp.body),
        HttpOutcome::HttpError(resp) => Err(format!("HTTP {}: {}", resp.status, resp.body)),
        HttpOutcome::NetworkError(e) => Err(e),
        HttpOutcome::Timeout => Err("request timed out".to_string()),
    };
    host.gate.audit(
        Effect::A2a,
        op,
        if result.is_ok() { "ok" } else { "error" },
        Some(url),
        None,
        None,
    );
    result
}

fn gated_rpc(host: &mut HostState, op: &str, url: &str, method: &str, params: Value) -> Result<String, String> {
    if let Err(e) = host.gate.check(Effect::A2a, host_of(url).as_deref()) {
        host.gate.audit(Effect::A2a, op, "denied", Some(url), None, None);
        return Err(e.to_string());
    }
    let result = json_rpc_call(url, method, params);
    host.gate.audit(
        Effect::A2a,
        op,
        if result.is_ok() { "ok" } else { "error" },
        Some(url),
        None,
        None,
    );
    result
}

fn write_result(host: &mut HostState, mem: &mut CallerMemory<'_, '_>, result: Result<String, String>) -> RuntimeResult<u32> {
    let (tag, text) = match result {
        Ok(t) => (0, t),
        Err(e) => (1, e),
    };
    let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
    write_narrow_tagged(&mut host.allocator, mem, tag, ptr)
}

/// Fetches `${url}/.well-known/agent.json` (§4.4 "A2A: `discover` fetches
/// `${url}/.well-known/agent.json`").
pub(crate) fn discover(caller: &mut Caller<'_, HostState>, url_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let base = read_string(mem, url_ptr)?;
        let manifest_url = format!("{}/.well-known/agent.json", base.trim_end_matches('/'));
        let result = gated_get(host, "a2a_discover", &manifest_url);
        write_result(host, mem, result)
    })
}

fn fresh_task_id() -> String {
    let n: u64 = rand::rng().random();
    format!("task-{n:016x}")
}

pub(crate) fn submit(caller: &mut Caller<'_, HostState>, url_ptr: u32, task_json_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let url = read_string(mem, url_ptr)?;
        let task_json = read_string(mem, task_json_ptr)?;
        let task: Value = serde_json::from_str(&task_json).unwrap_or(Value::Null);
        let task_id = fresh_task_id();
        let result = gated_rpc(host, "a2a_submit", &url, "tasks/send", json!({"id": task_id, "message": task}))
            .map(|_| task_id);
        write_result(host, mem, result)
    })
}

pub(crate) fn poll(caller: &mut Caller<'_, HostState>, url_ptr: u32, task_id_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let url = read_string(mem, url_ptr)?;
        let task_id = read_string(mem, task_id_ptr)?;
        let result = gated_rpc(host, "a2a_poll", &url, "tasks/get", json!({"id": task_id}));
        write_result(host, mem, result)
    })
}

pub(crate) fn cancel(caller: &mut Caller<'_, HostState>, url_ptr: u32, task_id_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let url = read_string(mem, url_ptr)?;
        let task_id = read_string(mem, task_id_ptr)?;
        let result = gated_rpc(host, "a2a_cancel", &url, "tasks/cancel", json!({"id": task_id}));
        write_result(host, mem, result)
    })
}
