use std::cell::RefCell;
use std::rc::Rc;

use log::info;

/// Collaborator that voices queue calls. Real kiosks wire a
/// speech-synthesis implementation here; this crate only ships a
/// logging one.
pub trait Announcer {
    /// Speak the given sentence.
    fn announce(&mut self, text: &str);

    /// Cancel any utterance still in flight. Called before every new
    /// announcement.
    fn cancel(&mut self) {}
}

/// Default announcer: writes the sentence to the log.
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, text: &str) {
        info!("[Announcer] {}", text);
    }
}

/// Test announcer that records every spoken sentence.
#[derive(Default)]
pub struct RecordingAnnouncer {
    spoken: Rc<RefCell<Vec<String>>>,
}

impl RecordingAnnouncer {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                spoken: Rc::clone(&spoken),
            },
            spoken,
        )
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, text: &str) {
        self.spoken.borrow_mut().push(text.to_string());
    }
}

pub(crate) fn bank_call_text(prefix: &str, display_number: u32, teller_name: &str) -> String {
    format!(
        "Nomor antrian {} {}, silakan menuju {}",
        prefix, display_number, teller_name
    )
}

pub(crate) fn order_ready_text(queue_number: u32) -> String {
    format!("Antrian nomor {}", queue_number)
}
