use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

static ENABLED: AtomicBool = AtomicBool::new(false);

// Logging is opt-in: a host that wants engine logs calls init_logger once
// at startup; everything logged before that is dropped.
pub fn init_logger() {
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn log(message: &str) {
    if ENABLED.load(Ordering::Relaxed) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}] {}", timestamp, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
