//! Line sink shared by every part of the console host.

use tokio::sync::mpsc;

/// Sends finished output lines to the printer task.
#[derive(Clone, Debug)]
pub struct ConsoleOutput {
    tx: mpsc::UnboundedSender<String>,
}

impl ConsoleOutput {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Output plus the receiving end for the printer.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn line(&self, line: impl Into<String>) {
        // printer gone means we are shutting down
        let _ = self.tx.send(line.into());
    }

    /// Private message to one invoker.
    pub fn tell(&self, recipient: &str, line: &str) {
        self.line(format!("[to {recipient}] {line}"));
    }
}
