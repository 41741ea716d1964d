use std::time::Duration;

use serde_json::json;
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged, write_wide_tagged};
use crate::memory::CallerMemory;
use crate::net::http::{blocking_request, HttpOutcome};
use crate::net::stream::{StreamEvent, StreamSession};
use crate::policy::Effect;
use crate::state::HostState;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

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
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Dispatches by model-name prefix (§4.4 "LLM provider routing"): names
/// beginning `claude-` go to the Anthropic-shaped Messages API, anything
/// else to an OpenAI-compatible chat-completions endpoint.
fn call_provider(
    host: &mut HostState,
    model: &str,
    prompt: &str,
    system: &str,
) -> Result<String, String> {
    if model.starts_with("claude-") {
        call_anthropic(host, model, prompt, system)
    } else {
        call_openai(host, model, prompt, system)
    }
}

fn call_anthropic(host: &mut HostState, model: &str, prompt: &str, system: &str) -> Result<String, String> {
    let base = host.config.anthropic_base_url.clone();
    let url = format!("{base}/messages");
    let api_key = host.config.anthropic_api_key.clone().unwrap_or_default();
    let body = json!({
        "model": model,
        "system": system,
        "max_tokens": 4096,
        "messages": [{"role": "user", "content": prompt}],
    })
    .to_string();
    let headers = vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("x-api-key".to_string(), api_key),
        ("anthropic-version".to_string(), "2023-06-01".to_string()),
    ];
    match blocking_request("POST", &url, headers, Some(body), DEFAULT_TIMEOUT) {
        HttpOutcome::Ok(resp) => extract_anthropic_text(&resp.body),
        HttpOutcome::HttpError(resp) => Err(format!("HTTP {}: {}", resp.status, resp.body)),
        HttpOutcome::NetworkError(e) => Err(e),
        HttpOutcome::Timeout => Err("request timed out".to_string()),
    }
}

fn extract_anthropic_text(body: &str) -> Result<String, String> {
    let v: serde_json::Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    v["content"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "missing content[0].text in response".to_string())
}

fn call_openai(host: &mut HostState, model: &str, prompt: &str, system: &str) -> Result<String, String> {
    let base = host.config.openai_base_url.clone();
    let url = format!("{base}/chat/completions");
    let api_key = host.config.openai_api_key.clone().unwrap_or_default();
    let mut messages = Vec::new();
    if !system.is_empty() {
        messages.push(json!({"role": "system", "content": system}));
    }
    messages.push(json!({"role": "user", "content": prompt}));
    let body = json!({ "model": model, "messages": messages }).to_string();
    let headers = vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("authorization".to_string(), format!("Bearer {api_key}")),
    ];
    match blocking_request("POST", &url, headers, Some(body), DEFAULT_TIMEOUT) {
        HttpOutcome::Ok(resp) => extract_openai_text(&resp.body),
        HttpOutcome::HttpError(resp) => Err(format!("HTTP {}: {}", resp.status, resp.body)),
        HttpOutcome::NetworkError(e) => Err(e),
        HttpOutcome::Timeout => Err("request timed out".to_string()),
    }
}

fn extract_openai_text(body: &str) -> Result<String, String> {
    let v: serde_json::Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    v["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "missing choices[0].message.content in response".to_string())
}

pub(crate) fn call(
    caller: &mut Caller<'_, HostState>,
    model_ptr: u32,
    prompt_ptr: u32,
    system_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let model = read_string(mem, model_ptr)?;
        let prompt = read_string(mem, prompt_ptr)?;
        let system = read_string(mem, system_ptr)?;
        let url = if model.starts_with("claude-") {
            format!("{}/messages", host.config.anthropic_base_url)
        } else {
            format!("{}/chat/completions", host.config.openai_base_url)
        };
        let started = std::time::Instant::now();
        if let Err(e) = host.gate.check(Effect::Model, host_of(&url).as_deref()) {
            host.gate.audit(Effect::Model, "llm_call", "denied", Some(&url), None, None);
            return write_narrow_tagged(
                &mut host.allocator,
                mem,
                1,
                alloc_string(&mut host.allocator, mem, &e.to_string())? as i32,
            );
        }
        let result = call_provider(host, &model, &prompt, &system);
        let duration_ms = started.elapsed().as_millis() as u64;
        let (tag, text) = match &result {
            Ok(text) => ("ok", text.clone()),
            Err(e) => ("error", e.clone()),
        };
        host.gate.audit(Effect::Model, "llm_call", tag, Some(&url), Some(duration_ms), None);
        let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
        write_narrow_tagged(&mut host.allocator, mem, if result.is_ok() { 0 } else { 1 }, ptr)
    })
}

/// Spawns the streaming worker and returns `Result<Int64, String>` (§4.4:
/// "`stream_start` returns Result⟨Int64, String⟩"), a one-request upfront
/// call whose body is then delivered one token at a time via
/// `stream_next`'s rendezvous handshake (§4.5).
pub(crate) fn stream_start(
    caller: &mut Caller<'_, HostState>,
    model_ptr: u32,
    prompt_ptr: u32,
    system_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let model = read_string(mem, model_ptr)?;
        let prompt = read_string(mem, prompt_ptr)?;
        let system = read_string(mem, system_ptr)?;
        let url = if model.starts_with("claude-") {
            format!("{}/messages", host.config.anthropic_base_url)
        } else {
            format!("{}/chat/completions", host.config.openai_base_url)
        };
        if let Err(e) = host.gate.check(Effect::Model, host_of(&url).as_deref()) {
            host.gate.audit(Effect::Model, "llm_stream_start", "denied", Some(&url), None, None);
            let ptr = alloc_string(&mut host.allocator, mem, &e.to_string())? as i32;
            return write_wide_tagged(&mut host.allocator, mem, 1, ptr as i64);
        }
        host.gate.audit(Effect::Model, "llm_stream_start", "ok", Some(&url), None, None);
        let handle = host.alloc_stream_handle();
        let session = StreamSession::spawn(move |tx, stop| {
            let result = call_provider_for_stream(&model, &prompt, &system);
            match result {
                Ok(text) => {
                    for word in text.split_inclusive(' ') {
                        if stop.try_recv().is_ok() {
                            return;
                        }
                        if tx.send(StreamEvent::Token(word.to_string())).is_err() {
                            return;
                        }
                    }
                    let _ = tx.send(StreamEvent::Done);
                }
                Err(e) => {
                    let _ = tx.send(StreamEvent::Error(e));
                }
            }
        });
        host.streams.insert(handle, session);
        write_wide_tagged(&mut host.allocator, mem, 0, handle)
    })
}

/// The streaming worker has no access to the `wasmtime::Caller`-scoped
/// `HostState`, so it re-reads provider config via a narrow free function
/// rather than a method on `HostState` (the session is already detached
/// onto its own thread by the time this runs).
fn call_provider_for_stream(model: &str, prompt: &str, system: &str) -> Result<String, String> {
    let config = crate::config::Config::from_env();
    let mut host_state = HostState::new(0, config);
    call_provider(&mut host_state, model, prompt, system)
}

pub(crate) fn stream_next(caller: &mut Caller<'_, HostState>, handle: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let Some(session) = host.streams.get_mut(&handle) else {
            return write_narrow_tagged(&mut host.allocator, mem, 1, 0);
        };
        match session.next_token() {
            Some(tok) => {
                let ptr = alloc_string(&mut host.allocator, mem, &tok)? as i32;
                write_narrow_tagged(&mut host.allocator, mem, 0, ptr)
            }
            None => write_narrow_tagged(&mut host.allocator, mem, 1, 0),
        }
    })
}

pub(crate) fn stream_close(caller: &mut Caller<'_, HostState>, handle: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let Some(mut session) = host.streams.remove(&handle) else {
            return alloc_string(&mut host.allocator, mem, "");
        };
        let error = session.close();
        alloc_string(&mut host.allocator, mem, &error)
    })
}
