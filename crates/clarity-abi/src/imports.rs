use crate::types::WasmType;

/// One entry of the host-runtime contract named in spec.md §1: a host
/// import's WASM-level name and signature. This table is the single
/// place the ABI between emitted code and the host is written down —
/// `clarity-codegen` uses it to build the module's import section and to
/// resolve `Call` nodes whose callee isn't a top-level function;
/// `clarity-runtime` uses the same table (via `clarity_runtime::linker`)
/// to assert that every function it registers on a `wasmtime::Linker`
/// matches exactly. Keeping one definition means the two sides can never
/// drift (design note: "do not duplicate the decision logic").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostImport {
    pub module: &'static str,
    pub name: &'static str,
    pub params: &'static [WasmType],
    pub result: WasmType,
}

const I32: WasmType = WasmType::I32;
const I64: WasmType = WasmType::I64;
const F64: WasmType = WasmType::F64;
const NONE: WasmType = WasmType::None;

macro_rules! imports {
    ($($name:ident ( $($p:expr),* ) -> $r:expr;)*) => {
        &[$(
            HostImport {
                module: "clarity",
                name: stringify!($name),
                params: &[$($p),*],
                result: $r,
            },
        )*]
    };
}

/// The complete, fixed set of imports every compiled Clarity module
/// declares, covering every primitive family in spec.md §4.4. A given
/// program need not call all of them, but the generator always declares
/// the whole table (mirroring a WASI snapshot: a fixed namespace rather
/// than a per-program negotiated one), so `clarity-runtime`'s `Linker`
/// wiring is identical across every compiled module.
pub const HOST_IMPORTS: &[HostImport] = imports! {
    // --- strings & bytes (§4.4 "Strings and bytes") ---
    string_concat(I32, I32) -> I32;
    string_eq(I32, I32) -> I32;
    string_length(I32) -> I64;
    string_substring(I32, I64, I64) -> I32;
    string_char_at(I32, I64) -> I32;
    string_contains(I32, I32) -> I32;
    string_starts_with(I32, I32) -> I32;
    string_ends_with(I32, I32) -> I32;
    string_find(I32, I32) -> I64;
    string_trim(I32) -> I32;
    string_split(I32, I32) -> I32;
    string_replace_all(I32, I32, I32) -> I32;
    string_repeat(I32, I64) -> I32;
    string_code_point_at(I32, I64) -> I64;
    string_from_code_point(I64) -> I32;
    int_to_float(I64) -> F64;
    float_to_int(F64) -> I64;
    int_to_string(I64) -> I32;
    float_to_string(F64) -> I32;
    string_to_int(I32) -> I32;
    string_to_float(I32) -> I32;
    bytes_length(I32) -> I64;

    // --- lists (§4.4 "Lists") ---
    list_length(I32) -> I64;
    list_get_i32(I32, I64) -> I32;
    list_get_i64(I32, I64) -> I64;
    list_head_i32(I32) -> I32;
    list_head_i64(I32) -> I64;
    list_tail(I32) -> I32;
    list_append_i32(I32, I32) -> I32;
    list_append_i64(I32, I64) -> I32;
    list_set_i32(I32, I64, I32) -> I32;
    list_set_i64(I32, I64, I64) -> I32;
    list_concat(I32, I32, I64) -> I32;
    list_reverse(I32) -> I32;

    // --- maps (§4.4 "Maps") ---
    map_new() -> I32;
    map_size(I32) -> I64;
    map_contains_string_key(I32, I32) -> I32;
    map_contains_int_key(I32, I64) -> I32;
    map_get_string_key_i32(I32, I32) -> I32;
    map_get_string_key_i64(I32, I32) -> I32;
    map_get_int_key_i32(I32, I64) -> I32;
    map_get_int_key_i64(I32, I64) -> I32;
    map_set_string_key_i32(I32, I32, I32) -> I32;
    map_set_string_key_i64(I32, I32, I64) -> I32;
    map_set_int_key_i32(I32, I64, I32) -> I32;
    map_set_int_key_i64(I32, I64, I64) -> I32;
    map_remove_string_key(I32, I32) -> I32;
    map_remove_int_key(I32, I64) -> I32;
    map_keys(I32) -> I32;
    map_values(I32) -> I32;

    // --- json (§4.4 "JSON") ---
    json_parse(I32) -> I32;
    json_stringify(I32) -> I32;
    json_get(I32, I32) -> I32;
    json_get_path(I32, I32) -> I32;
    json_array_length(I32) -> I64;
    json_array_get(I32, I64) -> I32;
    json_keys(I32) -> I32;

    // --- arithmetic helpers (§4.4 "Arithmetic helpers") ---
    abs_int(I64) -> I64;
    abs_float(F64) -> F64;
    min_int(I64, I64) -> I64;
    max_int(I64, I64) -> I64;
    clamp_int(I64, I64, I64) -> I64;
    min_float(F64, F64) -> F64;
    max_float(F64, F64) -> F64;
    clamp_float(F64, F64, F64) -> F64;
    sqrt_float(F64) -> F64;
    pow_float(F64, F64) -> F64;
    floor_float(F64) -> F64;
    ceil_float(F64) -> F64;
    float_rem(F64, F64) -> F64;

    // --- random (§4.4 "Random") ---
    random_int(I64, I64) -> I64;
    random_float() -> F64;

    // --- timestamps (§4.4 "Timestamps") ---
    time_now() -> I64;
    time_to_iso8601(I64) -> I32;
    time_from_iso8601(I32) -> I32;
    time_add_ms(I64, I64) -> I64;
    time_diff_ms(I64, I64) -> I64;

    // --- crypto (§4.4 "Crypto") ---
    sha256_hex(I32) -> I32;

    // --- regex (§4.4 "Regex") ---
    regex_is_match(I32, I32) -> I32;
    regex_captures(I32, I32) -> I32;

    // --- network (§4.4 "Network") ---
    http_get(I32) -> I32;
    http_post(I32, I32) -> I32;
    http_request(I32, I32, I32, I32) -> I32;

    // --- LLM provider routing (§4.4 "LLM provider routing") ---
    llm_call(I32, I32, I32) -> I32;
    llm_stream_start(I32, I32, I32) -> I32;
    llm_stream_next(I64) -> I32;
    llm_stream_close(I64) -> I32;

    // --- MCP / A2A agent protocols (§4.4 "Agent protocols") ---
    mcp_connect(I32) -> I64;
    mcp_list_tools(I64) -> I32;
    mcp_call_tool(I64, I32, I32) -> I32;
    a2a_discover(I32) -> I32;
    a2a_submit(I32, I32) -> I32;
    a2a_poll(I32, I32) -> I32;
    a2a_cancel(I32, I32) -> I32;

    // --- embeddings & retrieval (§4.4 "Embeddings and retrieval") ---
    embed_text(I32) -> I32;
    cosine_similarity(I32, I32) -> F64;
    chunk_text(I32, I64) -> I32;
    embed_and_retrieve(I32, I32, I64) -> I32;

    // --- human-in-the-loop (§4.4 "Human-in-the-loop") ---
    hitl_ask(I32, I32) -> I32;

    // --- trace & checkpoint (§4.4 "Trace and checkpoint") ---
    trace_start(I32) -> I64;
    trace_log(I64, I32) -> NONE;
    trace_end(I64) -> NONE;
    checkpoint_save(I32, I32) -> I32;
    checkpoint_load(I32) -> I32;
    checkpoint_save_raw(I32, I32) -> I32;

    // --- memory & allocation (§4.2; the module's own allocation hook) ---
    host_alloc(I64) -> I32;
    host_free(I32) -> NONE;
    arena_save() -> I64;
    arena_restore(I64) -> NONE;
    arena_restore_keeping_str(I64, I32) -> I32;

    // --- test assertions (§4.4 "Test assertions") ---
    test_assert(I32, I32, I32, I32) -> NONE;
};

/// Looks up a host import by name, the way `clarity-codegen` resolves a
/// `Call` node whose callee isn't one of the module's own top-level
/// functions.
pub fn find(name: &str) -> Option<&'static HostImport> {
    HOST_IMPORTS.iter().find(|i| i.name == name)
}
