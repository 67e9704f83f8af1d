//! Alert delivery
//!
//! The monitor hands a finished message to an `AlertSender`; the actual
//! delivery channel (log, SMS, pager) is the sender's concern.

use std::sync::Mutex;

/// Fire-and-forget message delivery consumed by the monitor
pub trait AlertSender: Send + Sync {
    fn send(&self, message: &str);
}

/// Alert sender that emits through the tracing subscriber
#[derive(Debug, Default)]
pub struct LogAlertSender;

impl LogAlertSender {
    pub fn new() -> Self {
        LogAlertSender
    }
}

impl AlertSender for LogAlertSender {
    fn send(&self, message: &str) {
        tracing::warn!(target: "vitalwatch::alert", "{}", message);
    }
}

/// Test double that captures every sent message in order
#[derive(Debug, Default)]
pub struct RecordingAlertSender {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlertSender {
    pub fn new() -> Self {
        RecordingAlertSender {
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl AlertSender for RecordingAlertSender {
    fn send(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recording_sender_keeps_messages_in_order() {
        let sender = RecordingAlertSender::new();
        sender.send("first");
        sender.send("second");

        assert_eq!(sender.sent_count(), 2);
        assert_eq!(sender.messages(), vec!["first", "second"]);
    }
}
