use std::fs;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde_json::json;
use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::memory::CallerMemory;
use crate::policy::Effect;
use crate::state::HostState;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

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

/// Keeps the on-disk question/answer files within the configured
/// directory regardless of what characters the guest passes as a key
/// (§4.4: "`{dir}/{safe_key}.question`").
fn safe_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Writes the question file, polls for the answer file at ~500ms
/// intervals, and returns the answer text, a timeout marker, or an I/O
/// error, per §4.4's human-in-the-loop state machine.
fn ask(dir: &std::path::Path, timeout: Duration, key: &str, question: &str) -> Result<String, String> {
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let stem = safe_key(key);
    let question_path = dir.join(format!("{stem}.question"));
    let answer_path = dir.join(format!("{stem}.answer"));
    let payload = json!({
        "key": key,
        "question": question,
        "timestamp": now_millis(),
        "pid": std::process::id(),
    });
    fs::write(&question_path, payload.to_string()).map_err(|e| e.to_string())?;

    let deadline = Instant::now() + timeout;
    loop {
        if answer_path.exists() {
            let answer = fs::read_to_string(&answer_path).unwrap_or_default();
            let _ = fs::remove_file(&answer_path);
            let _ = fs::remove_file(&question_path);
            return Ok(answer.trim().to_string());
        }
        if Instant::now() >= deadline {
            let _ = fs::remove_file(&question_path);
            return Ok("__clarity_hitl_timeout__".to_string());
        }
        thread::sleep(POLL_INTERVAL);
    }
}

pub(crate) fn hitl_ask(
    caller: &mut Caller<'_, HostState>,
    key_ptr: u32,
    question_ptr: u32,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let key = read_string(mem, key_ptr)?;
        let question = read_string(mem, question_ptr)?;
        if let Err(e) = host.gate.check(Effect::HumanInLoop, None) {
            host.gate.audit(Effect::HumanInLoop, "hitl_ask", "denied", None, None, Some(&key));
            let ptr = alloc_string(&mut host.allocator, mem, &e.to_string())? as i32;
            return write_narrow_tagged(&mut host.allocator, mem, 1, ptr);
        }
        let dir = host.config.hitl_dir.clone();
        let timeout = host.config.hitl_timeout;
        let started = Instant::now();
        let result = ask(&dir, timeout, &key, &question);
        let duration_ms = started.elapsed().as_millis() as u64;
        host.gate.audit(
            Effect::HumanInLoop,
            "hitl_ask",
            if result.is_ok() { "ok" } else { "error" },
            None,
            Some(duration_ms),
            Some(&key),
        );
        let (tag, text) = match result {
            Ok(t) => (0, t),
            Err(e) => (1, e),
        };
        let ptr = alloc_string(&mut host.allocator, mem, &text)? as i32;
        write_narrow_tagged(&mut host.allocator, mem, tag, ptr)
    })
}
