use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

/// One event a streaming worker can produce, matching the three
/// post-Idle states of spec.md §4.5's "Stream session" state machine
/// (TokenReady / Done / Error). The Idle state itself is represented by
/// there being no event yet to receive — `stream_next` blocking on the
/// channel *is* the Idle wait.
pub(crate) enum StreamEvent {
    Token(String),
    Done,
    Error(String),
}

/// A live LLM streaming session. Per spec.md §4.5 the handshake is
/// strictly one-token-at-a-time with implicit backpressure ("the worker
/// cannot outrun the consumer"); an `mpsc::sync_channel(0)` rendezvous
/// channel gives exactly that without a hand-rolled shared-buffer
/// control word — see DESIGN.md for this substitution.
pub(crate) struct StreamSession {
    tokens: Receiver<StreamEvent>,
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
    done: bool,
    error: Option<String>,
}

impl StreamSession {
    /// Spawns `work` on a disposable worker thread. `work` is handed the
    /// token sender and a stop-signal receiver; it should send zero or
    /// more `Token`s followed by exactly one `Done` or `Error`, checking
    /// the stop receiver between tokens so `close` can cut it off early.
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        F: FnOnce(Sender<StreamEvent>, Receiver<()>) + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(0);
        let (stop_tx, stop_rx) = mpsc::channel();
        let worker = std::thread::spawn(move || work(tx, stop_rx));
        StreamSession {
            tokens: rx,
            stop: Some(stop_tx),
            worker: Some(worker),
            done: false,
            error: None,
        }
    }

    /// Blocks for the next token (spec.md §4.5: "`stream_next` blocks on
    /// Idle, reads on TokenReady ... returns the token"). Returns `None`
    /// on end-of-stream or error, capturing any error message for
    /// `close` to report (§4.5: "on Done or Error it captures any error
    /// message into the session and returns None").
    pub(crate) fn next_token(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        match self.tokens.recv() {
            Ok(StreamEvent::Token(tok)) => Some(tok),
            Ok(StreamEvent::Done) => {
                self.done = true;
                None
            }
            Ok(StreamEvent::Error(message)) => {
                self.done = true;
                self.error = Some(message);
                None
            }
            Err(_) => {
                self.done = true;
                None
            }
        }
    }

    /// Terminates the worker regardless of its current state and
    /// returns the stored error string, `""` on clean close (spec.md
    /// §4.5: "`stream_close` terminates the worker and returns the
    /// stored error string").
    pub(crate) fn close(&mut self) -> String {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.error.take().unwrap_or_default()
    }
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.close();
        }
    }
}
