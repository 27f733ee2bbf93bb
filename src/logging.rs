// tracing subscriber that writes formatted events to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the console subscriber. A second call keeps the first subscriber.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        // wasm32-unknown-unknown has no system clock.
        .without_time()
        .try_init();

    if installed.is_err() {
        tracing::debug!("console logging already installed");
    }
}

/// Hands out one `ConsoleWriter` per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        ConsoleWriter {
            level,
            buf: Vec::new(),
        }
    }

    fn message(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.level, &self.message());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, message: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let message = JsValue::from_str(message);
    match level {
        Level::ERROR => console::error_1(&message),
        Level::WARN => console::warn_1(&message),
        Level::INFO => console::info_1(&message),
        _ => console::debug_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, message: &str) {
    eprintln!("{message}");
}
