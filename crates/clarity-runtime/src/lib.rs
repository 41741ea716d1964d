//! The Clarity host runtime (spec.md §4.4/§4.5): every imported
//! primitive a compiled module can call, the policy/audit gate, and the
//! `wasmtime::Linker` wiring that ties them to the fixed import table
//! `clarity_abi::HOST_IMPORTS` describes.
//!
//! This crate embeds the teacher's own engine: a compiled Clarity module
//! is just a `wasmtime::Module`, run on a `wasmtime::Store<HostState>`
//! through a `Linker<HostState>` built by [`build_linker`].

mod a2a;
mod arith;
mod checkpoint;
mod config;
mod crypto;
mod embed;
mod error;
mod heap;
mod hitl;
mod hostalloc;
mod json;
mod lists;
mod maps;
mod memory;
mod mcp;
mod net;
mod policy;
mod random;
mod regexp;
mod state;
mod strings;
mod testing;
mod time;
mod trace;

pub use config::Config;
pub use error::{RuntimeError, RuntimeResult};
pub use policy::{Effect, Gate, PolicyError};
pub use state::{HostState, TestFailure};

use wasmtime::{Engine, Linker};

/// Registers every entry of [`clarity_abi::imports::HOST_IMPORTS`] on a
/// fresh `Linker`, so a compiled module's import section always resolves
/// (§4.4: "`clarity-runtime` ... exposes a `Linker` wiring of every
/// import"). Each closure below matches one `HOST_IMPORTS` signature
/// exactly; `tests::every_registered_import_is_in_the_host_table` checks
/// that the set of names this function registers is exactly the set the
/// ABI table names, so the two can never silently drift apart.
pub fn build_linker(engine: &Engine) -> anyhow::Result<Linker<HostState>> {
    let mut linker = Linker::new(engine);

    linker.func_wrap("clarity", "string_concat", strings::concat)?;
    linker.func_wrap("clarity", "string_eq", strings::eq)?;
    linker.func_wrap("clarity", "string_length", strings::length)?;
    linker.func_wrap("clarity", "string_substring", strings::substring)?;
    linker.func_wrap("clarity", "string_char_at", strings::char_at)?;
    linker.func_wrap("clarity", "string_contains", strings::contains)?;
    linker.func_wrap("clarity", "string_starts_with", strings::starts_with)?;
    linker.func_wrap("clarity", "string_ends_with", strings::ends_with)?;
    linker.func_wrap("clarity", "string_find", strings::find)?;
    linker.func_wrap("clarity", "string_trim", strings::trim)?;
    linker.func_wrap("clarity", "string_split", strings::split)?;
    linker.func_wrap("clarity", "string_replace_all", strings::replace_all)?;
    linker.func_wrap("clarity", "string_repeat", strings::repeat)?;
    linker.func_wrap("clarity", "string_code_point_at", strings::code_point_at)?;
    linker.func_wrap("clarity", "string_from_code_point", strings::from_code_point)?;
    linker.func_wrap("clarity", "int_to_float", strings::int_to_float)?;
    linker.func_wrap("clarity", "float_to_int", strings::float_to_int)?;
    linker.func_wrap("clarity", "int_to_string", strings::int_to_string)?;
    linker.func_wrap("clarity", "float_to_string", strings::float_to_string)?;
    linker.func_wrap("clarity", "string_to_int", strings::string_to_int)?;
    linker.func_wrap("clarity", "string_to_float", strings::string_to_float)?;
    linker.func_wrap("clarity", "bytes_length", strings::bytes_length)?;

    linker.func_wrap("clarity", "list_length", lists::length)?;
    linker.func_wrap("clarity", "list_get_i32", lists::get_i32)?;
    linker.func_wrap("clarity", "list_get_i64", lists::get_i64)?;
    linker.func_wrap("clarity", "list_head_i32", lists::head_i32)?;
    linker.func_wrap("clarity", "list_head_i64", lists::head_i64)?;
    linker.func_wrap("clarity", "list_tail", lists::tail)?;
    linker.func_wrap("clarity", "list_append_i32", lists::append_i32)?;
    linker.func_wrap("clarity", "list_append_i64", lists::append_i64)?;
    linker.func_wrap("clarity", "list_set_i32", lists::set_i32)?;
    linker.func_wrap("clarity", "list_set_i64", lists::set_i64)?;
    linker.func_wrap("clarity", "list_concat", lists::concat)?;
    linker.func_wrap("clarity", "list_reverse", lists::reverse)?;

    linker.func_wrap("clarity", "map_new", maps::new)?;
    linker.func_wrap("clarity", "map_size", maps::size)?;
    linker.func_wrap("clarity", "map_contains_string_key", maps::contains_string_key)?;
    linker.func_wrap("clarity", "map_contains_int_key", maps::contains_int_key)?;
    linker.func_wrap("clarity", "map_get_string_key_i32", maps::get_string_key_i32)?;
    linker.func_wrap("clarity", "map_get_string_key_i64", maps::get_string_key_i64)?;
    linker.func_wrap("clarity", "map_get_int_key_i32", maps::get_int_key_i32)?;
    linker.func_wrap("clarity", "map_get_int_key_i64", maps::get_int_key_i64)?;
    linker.func_wrap("clarity", "map_set_string_key_i32", maps::set_string_key_i32)?;
    linker.func_wrap("clarity", "map_set_string_key_i64", maps::set_string_key_i64)?;
    linker.func_wrap("clarity", "map_set_int_key_i32", maps::set_int_key_i32)?;
    linker.func_wrap("clarity", "map_set_int_key_i64", maps::set_int_key_i64)?;
    linker.func_wrap("clarity", "map_remove_string_key", maps::remove_string_key)?;
    linker.func_wrap("clarity", "map_remove_int_key", maps::remove_int_key)?;
    linker.func_wrap("clarity", "map_keys", maps::keys)?;
    linker.func_wrap("clarity", "map_values", maps::values)?;

    linker.func_wrap("clarity", "json_parse", json::parse)?;
    linker.func_wrap("clarity", "json_stringify", json::stringify)?;
    linker.func_wrap("clarity", "json_get", json::get)?;
    linker.func_wrap("clarity", "json_get_path", json::get_path)?;
    linker.func_wrap("clarity", "json_array_length", json::array_length)?;
    linker.func_wrap("clarity", "json_array_get", json::array_get)?;
    linker.func_wrap("clarity", "json_keys", json::keys)?;

    linker.func_wrap("clarity", "abs_int", |_: wasmtime::Caller<'_, HostState>, n: i64| arith::abs_int(n))?;
    linker.func_wrap("clarity", "abs_float", |_: wasmtime::Caller<'_, HostState>, n: f64| arith::abs_float(n))?;
    linker.func_wrap("clarity", "min_int", |_: wasmtime::Caller<'_, HostState>, a: i64, b: i64| arith::min_int(a, b))?;
    linker.func_wrap("clarity", "max_int", |_: wasmtime::Caller<'_, HostState>, a: i64, b: i64| arith::max_int(a, b))?;
    linker.func_wrap(
        "clarity",
        "clamp_int",
        |_: wasmtime::Caller<'_, HostState>, n: i64, lo: i64, hi: i64| arith::clamp_int(n, lo, hi),
    )?;
    linker.func_wrap("clarity", "min_float", |_: wasmtime::Caller<'_, HostState>, a: f64, b: f64| arith::min_float(a, b))?;
    linker.func_wrap("clarity", "max_float", |_: wasmtime::Caller<'_, HostState>, a: f64, b: f64| arith::max_float(a, b))?;
    linker.func_wrap(
        "clarity",
        "clamp_float",
        |_: wasmtime::Caller<'_, HostState>, n: f64, lo: f64, hi: f64| arith::clamp_float(n, lo, hi),
    )?;
    linker.func_wrap("clarity", "sqrt_float", |_: wasmtime::Caller<'_, HostState>, n: f64| arith::sqrt_float(n))?;
    linker.func_wrap(
        "clarity",
        "pow_float",
        |_: wasmtime::Caller<'_, HostState>, base: f64, exp: f64| arith::pow_float(base, exp),
    )?;
    linker.func_wrap("clarity", "floor_float", |_: wasmtime::Caller<'_, HostState>, n: f64| arith::floor_float(n))?;
    linker.func_wrap("clarity", "ceil_float", |_: wasmtime::Caller<'_, HostState>, n: f64| arith::ceil_float(n))?;
    linker.func_wrap(
        "clarity",
        "float_rem",
        |_: wasmtime::Caller<'_, HostState>, a: f64, b: f64| arith::float_rem(a, b),
    )?;

    linker.func_wrap(
        "clarity",
        "random_int",
        |_: wasmtime::Caller<'_, HostState>, min: i64, max: i64| random::random_int(min, max),
    )?;
    linker.func_wrap("clarity", "random_float", |_: wasmtime::Caller<'_, HostState>| random::random_float())?;

    linker.func_wrap("clarity", "time_now", |_: wasmtime::Caller<'_, HostState>| time::now())?;
    linker.func_wrap("clarity", "time_to_iso8601", time::to_iso8601_ptr)?;
    linker.func_wrap("clarity", "time_from_iso8601", time::from_iso8601_ptr)?;
    linker.func_wrap(
        "clarity",
        "time_add_ms",
        |_: wasmtime::Caller<'_, HostState>, epoch_millis: i64, delta: i64| time::add_ms(epoch_millis, delta),
    )?;
    linker.func_wrap(
        "clarity",
        "time_diff_ms",
        |_: wasmtime::Caller<'_, HostState>, a: i64, b: i64| time::diff_ms(a, b),
    )?;

    linker.func_wrap("clarity", "sha256_hex", crypto::sha256_hex)?;

    linker.func_wrap("clarity", "regex_is_match", regexp::is_match)?;
    linker.func_wrap("clarity", "regex_captures", regexp::captures)?;

    linker.func_wrap("clarity", "http_get", net::get)?;
    linker.func_wrap("clarity", "http_post", net::post)?;
    linker.func_wrap("clarity", "http_request", net::request)?;

    linker.func_wrap("clarity", "llm_call", net::llm::call)?;
    linker.func_wrap("clarity", "llm_stream_start", net::llm::stream_start)?;
    linker.func_wrap("clarity", "llm_stream_next", net::llm::stream_next)?;
    linker.func_wrap("clarity", "llm_stream_close", net::llm::stream_close)?;

    linker.func_wrap("clarity", "mcp_connect", mcp::connect)?;
    linker.func_wrap("clarity", "mcp_list_tools", mcp::list_tools)?;
    linker.func_wrap("clarity", "mcp_call_tool", mcp::call_tool)?;
    linker.func_wrap("clarity", "a2a_discover", a2a::discover)?;
    linker.func_wrap("clarity", "a2a_submit", a2a::submit)?;
    linker.func_wrap("clarity", "a2a_poll", a2a::poll)?;
    linker.func_wrap("clarity", "a2a_cancel", a2a::cancel)?;

    linker.func_wrap("clarity", "embed_text", embed::embed_text)?;
    linker.func_wrap("clarity", "cosine_similarity", embed::cosine_similarity)?;
    linker.func_wrap("clarity", "chunk_text", embed::chunk_text)?;
    linker.func_wrap("clarity", "embed_and_retrieve", embed::embed_and_retrieve)?;

    linker.func_wrap("clarity", "hitl_ask", hitl::hitl_ask)?;

    linker.func_wrap("clarity", "trace_start", trace::start)?;
    linker.func_wrap("clarity", "trace_log", trace::log)?;
    linker.func_wrap("clarity", "trace_end", trace::end)?;
    linker.func_wrap("clarity", "checkpoint_save", checkpoint::checkpoint_save)?;
    linker.func_wrap("clarity", "checkpoint_load", checkpoint::checkpoint_load)?;
    linker.func_wrap("clarity", "checkpoint_save_raw", checkpoint::checkpoint_save_raw)?;

    linker.func_wrap("clarity", "host_alloc", hostalloc::host_alloc)?;
    linker.func_wrap("clarity", "host_free", hostalloc::host_free)?;
    linker.func_wrap("clarity", "arena_save", hostalloc::arena_save)?;
    linker.func_wrap("clarity", "arena_restore", hostalloc::arena_restore)?;
    linker.func_wrap("clarity", "arena_restore_keeping_str", hostalloc::arena_restore_keeping_str)?;

    linker.func_wrap("clarity", "test_assert", testing::test_assert)?;

    Ok(linker)
}
