// src/domain/identity.rs
//
// Record identity and creation timestamps.
//
// IDs are the decimal rendering of a millisecond Unix timestamp. Within one
// process the sequence is forced strictly increasing, so two records created in
// the same millisecond still get distinct IDs.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Current time as Unix epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate a new record ID.
pub fn generate_id() -> String {
    let now = now_millis();
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_ISSUED.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(current) => last = current,
        }
    }
}
