use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use clarity_alloc::Allocator;

use crate::config::Config;
use crate::net::stream::StreamSession;
use crate::policy::Gate;

/// A map key, §4.4 "Maps — separate entry points per key flavor
/// (string-keyed, int64-keyed)".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MapKey {
    Str(String),
    Int(i64),
}

/// A map value, §4.4 "... and value flavor (i32 pointer, i64 integer)".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapValue {
    I32(i32),
    I64(i64),
}

/// An immutable dictionary handed out by handle. `set`/`remove` clone the
/// backing map (§4.4: "set (returns new handle with original unchanged)");
/// this crate does not need structural sharing to be correct, only
/// independence between handles.
pub(crate) type ImmutableMap = Arc<HashMap<MapKey, MapValue>>;

/// A registered MCP session: just the base URL `connect` was given. The
/// actual JSON-RPC traffic is issued fresh per call through `net::http`.
pub(crate) struct McpSession {
    pub(crate) url: String,
}

/// One in-flight `trace_start`/`trace_log`/`trace_end` span (§4.4 "Trace
/// and checkpoint").
pub(crate) struct TraceSpan {
    pub(crate) op: String,
    pub(crate) started: Instant,
    pub(crate) events: Vec<(u64, String)>,
}

/// One accumulated test-assertion failure (§4.4 "Test assertions").
#[derive(Debug, Clone)]
pub struct TestFailure {
    pub kind: String,
    pub actual: String,
    pub expected: String,
    pub test_name: String,
}

/// The `wasmtime::Store` data type for a running Clarity instance: every
/// piece of mutable state a host import might touch. Per spec.md §5,
/// exactly one host thread ever touches this at a time — no locking is
/// needed internally, matching "the allocator, intern table, registries
/// ... and policy state are all mutated only by the single host thread
/// during an import call."
pub struct HostState {
    pub(crate) allocator: Allocator,
    pub(crate) gate: Gate,
    pub(crate) config: Config,

    pub(crate) maps: HashMap<i32, ImmutableMap>,
    pub(crate) next_map_handle: i32,

    pub(crate) streams: HashMap<i64, StreamSession>,
    pub(crate) next_stream_handle: i64,

    pub(crate) mcp_sessions: HashMap<i64, McpSession>,
    pub(crate) next_mcp_handle: i64,

    pub(crate) traces: HashMap<i64, TraceSpan>,
    pub(crate) next_trace_handle: i64,

    pub(crate) test_failures: Vec<TestFailure>,
    pub(crate) test_count: u64,
}

impl HostState {
    pub fn new(heap_base: u32, config: Config) -> Self {
        HostState {
            allocator: Allocator::new(heap_base),
            gate: Gate::from_config(&config),
            config,
            maps: HashMap::new(),
            next_map_handle: 1,
            streams: HashMap::new(),
            next_stream_handle: 1,
            mcp_sessions: HashMap::new(),
            next_mcp_handle: 1,
            traces: HashMap::new(),
            next_trace_handle: 1,
            test_failures: Vec::new(),
            test_count: 0,
        }
    }

    pub(crate) fn alloc_map_handle(&mut self) -> i32 {
        let h = self.next_map_handle;
        self.next_map_handle += 1;
        h
    }

    pub(crate) fn alloc_stream_handle(&mut self) -> i64 {
        let h = self.next_stream_handle;
        self.next_stream_handle += 1;
        h
    }

    pub(crate) fn alloc_mcp_handle(&mut self) -> i64 {
        let h = self.next_mcp_handle;
        self.next_mcp_handle += 1;
        h
    }

    pub(crate) fn alloc_trace_handle(&mut self) -> i64 {
        let h = self.next_trace_handle;
        self.next_trace_handle += 1;
        h
    }

    /// Drains the accumulated test-assertion failures, resetting the
    /// counter, for an external test runner to read (§4.4 "the host
    /// exposes read-and-reset operations").
    pub fn take_test_failures(&mut self) -> (u64, Vec<TestFailure>) {
        let count = self.test_count;
        self.test_count = 0;
        (count, std::mem::take(&mut self.test_failures))
    }

    pub fn memory_stats(&self) -> clarity_alloc::AllocatorStats {
        self.allocator.stats()
    }
}
