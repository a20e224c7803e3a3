//! Clipboard access off the UI thread.
//!
//! Writing to the system clipboard can block (X11 selection owners, Wayland
//! round-trips), so copies go through a [`ClipboardWorker`] thread and their
//! results come back as [`CopyOutcome`]s polled once per frame.

use std::fmt;
use std::sync::mpsc;
use std::thread;

/// Error from a clipboard backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// Anything text can be copied into.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard through `arboard`.
///
/// On X11 and Wayland the contents are served by this process, so the
/// instance must stay alive after writing.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}

/// Result of one copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub text: String,
    pub result: Result<(), ClipboardError>,
}

/// Owns the clipboard sink on a dedicated thread.
pub struct ClipboardWorker {
    requests: Option<mpsc::Sender<String>>,
    outcomes: mpsc::Receiver<CopyOutcome>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClipboardWorker {
    /// Spawns the worker around the system clipboard.
    pub fn system() -> Self {
        Self::spawn(SystemClipboard::new)
    }

    /// Spawns the worker; `make_sink` runs on the worker thread.
    ///
    /// If it fails, every request is answered with that error.
    pub fn spawn<S, F>(make_sink: F) -> Self
    where
        S: ClipboardSink + 'static,
        F: FnOnce() -> Result<S, ClipboardError> + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<String>();
        let (out_tx, out_rx) = mpsc::channel::<CopyOutcome>();

        let spawned = thread::Builder::new()
            .name("tincture-clipboard".into())
            .spawn(move || run_worker(make_sink, req_rx, out_tx));

        match spawned {
            Ok(handle) => Self { requests: Some(req_tx), outcomes: out_rx, handle: Some(handle) },
            Err(e) => {
                log::warn!("failed to spawn clipboard thread: {e}");
                // No receiver: every request fails in `request`.
                Self { requests: None, outcomes: out_rx, handle: None }
            }
        }
    }

    /// Queues `text` for copying. Never blocks.
    ///
    /// Returns the failed outcome directly if the worker is gone.
    pub fn request(&self, text: impl Into<String>) -> Option<CopyOutcome> {
        let text = text.into();
        let sent = match &self.requests {
            Some(tx) => tx.send(text),
            None => Err(mpsc::SendError(text)),
        };
        match sent {
            Ok(()) => None,
            Err(mpsc::SendError(text)) => Some(CopyOutcome {
                text,
                result: Err(ClipboardError("clipboard worker is not running".into())),
            }),
        }
    }

    /// Finished outcomes in request order. Never blocks.
    pub fn poll(&self) -> Vec<CopyOutcome> {
        self.outcomes.try_iter().collect()
    }
}

impl Drop for ClipboardWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests = None;
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("clipboard thread panicked");
            }
        }
    }
}

fn run_worker<S, F>(make_sink: F, requests: mpsc::Receiver<String>, outcomes: mpsc::Sender<CopyOutcome>)
where
    S: ClipboardSink,
    F: FnOnce() -> Result<S, ClipboardError>,
{
    let mut sink = make_sink();
    if let Err(e) = &sink {
        log::warn!("clipboard unavailable: {e}");
    }

    for text in requests {
        let result = match sink.as_mut() {
            Ok(sink) => sink.write_text(&text),
            Err(e) => Err(e.clone()),
        };
        log::debug!("copy {:?}: {:?}", text, result);
        if outcomes.send(CopyOutcome { text, result }).is_err() {
            break;
        }
    }
}
