use wasmtime::Caller;

use crate::error::RuntimeResult;
use crate::heap::{alloc_string, read_string, write_narrow_tagged};
use crate::lists::alloc_list_i32;
use crate::memory::CallerMemory;
use crate::policy::Effect;
use crate::state::HostState;

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

/// A deterministic, locally-computed stand-in embedding: a fixed-width
/// bag-of-bytes hash. No network call, no model dependency — `embed_text`
/// still goes through the `Embed` policy gate since it is the effect the
/// deny vocabulary names, independent of how the vector is produced.
const DIMS: usize = 32;

fn embed_vector(text: &str) -> Vec<f64> {
    let mut acc = [0f64; DIMS];
    for (i, b) in text.bytes().enumerate() {
        acc[i % DIMS] += (b as f64 + 1.0) * ((i / DIMS) as f64 + 1.0);
    }
    let norm: f64 = acc.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in acc.iter_mut() {
            *x /= norm;
        }
    }
    acc.to_vec()
}

fn vector_json(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| x.to_string()).collect();
    format!("[{}]", parts.join(","))
}

fn parse_vector(text: &str) -> Option<Vec<f64>> {
    let v: serde_json::Value = serde_json::from_str(text).ok()?;
    let arr = v.as_array()?;
    arr.iter().map(|e| e.as_f64()).collect()
}

pub(crate) fn embed_text(caller: &mut Caller<'_, HostState>, text_ptr: u32) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let text = read_string(mem, text_ptr)?;
        let result = host
            .gate
            .check(Effect::Embed, None)
            .map(|_| vector_json(&embed_vector(&text)))
            .map_err(|e| e.to_string());
        host.gate.audit(
            Effect::Embed,
            "embed_text",
            if result.is_ok() { "ok" } else { "denied" },
            None,
            None,
            None,
        );
        let (tag, out) = match result {
            Ok(t) => (0, t),
            Err(e) => (1, e),
        };
        let ptr = alloc_string(&mut host.allocator, mem, &out)? as i32;
        write_narrow_tagged(&mut host.allocator, mem, tag, ptr)
    })
}

pub(crate) fn cosine_similarity(
    caller: &mut Caller<'_, HostState>,
    a_ptr: u32,
    b_ptr: u32,
) -> RuntimeResult<f64> {
    with_mem(caller, |mem, host| {
        let a_text = read_string(mem, a_ptr)?;
        let b_text = read_string(mem, b_ptr)?;
        let _ = host;
        let (Some(a), Some(b)) = (parse_vector(&a_text), parse_vector(&b_text)) else {
            return Ok(0.0);
        };
        Ok(cosine(&a, &b))
    })
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na * nb)
    }
}

fn chunk(text: &str, size: usize) -> Vec<String> {
    if size == 0 {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|c| c.iter().collect::<String>())
        .collect()
}

pub(crate) fn chunk_text(caller: &mut Caller<'_, HostState>, text_ptr: u32, size: i64) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let text = read_string(mem, text_ptr)?;
        let chunks = chunk(&text, size.max(0) as usize);
        let mut ptrs = Vec::with_capacity(chunks.len());
        for c in &chunks {
            ptrs.push(alloc_string(&mut host.allocator, mem, c)? as i32);
        }
        alloc_list_i32(&mut host.allocator, mem, &ptrs)
    })
}

/// Batch-embeds `query` plus every entry of `corpus` and returns the
/// top-`top_k` corpus chunks by cosine similarity (§4.4: "batch-embeds a
/// query plus corpus, ranks by cosine, returns the top-K chunks").
pub(crate) fn embed_and_retrieve(
    caller: &mut Caller<'_, HostState>,
    query_ptr: u32,
    corpus_ptr: u32,
    top_k: i64,
) -> RuntimeResult<u32> {
    with_mem(caller, |mem, host| {
        let query = read_string(mem, query_ptr)?;
        let count = if corpus_ptr == 0 { 0 } else { mem.read_u32(corpus_ptr)? };
        let mut corpus = Vec::with_capacity(count as usize);
        for i in 0..count {
            let elem_ptr = mem.read_u32(corpus_ptr + clarity_abi::HEADER_LEN + i * 4)?;
            corpus.push(read_string(mem, elem_ptr)?);
        }
        if host.gate.check(Effect::Embed, None).is_err() {
            host.gate.audit(Effect::Embed, "embed_and_retrieve", "denied", None, None, None);
            return alloc_list_i32(&mut host.allocator, mem, &[]);
        }
        host.gate.audit(Effect::Embed, "embed_and_retrieve", "ok", None, None, None);
        let q = embed_vector(&query);
        let mut scored: Vec<(f64, &String)> = corpus
            .iter()
            .map(|c| (cosine(&q, &embed_vector(c)), c))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        let k = top_k.max(0) as usize;
        let mut ptrs = Vec::with_capacity(k.min(scored.len()));
        for (_, text) in scored.into_iter().take(k) {
            ptrs.push(alloc_string(&mut host.allocator, mem, text)? as i32);
        }
        alloc_list_i32(&mut host.allocator, mem, &ptrs)
    })
}
