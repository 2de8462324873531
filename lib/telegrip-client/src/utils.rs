// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::SystemTime;

// Only needs to be unique per sender, so a counter seeded from the clock is enough.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a "random" ID suitable for sending messages or media.
pub(crate) fn generate_random_id() -> i64 {
    if LAST_ID.load(Ordering::SeqCst) == 0 {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as i64;

        let _ = LAST_ID.compare_exchange(0, now, Ordering::SeqCst, Ordering::SeqCst);
    }

    LAST_ID.fetch_add(1, Ordering::SeqCst)
}

pub(crate) fn generate_random_ids(n: usize) -> Vec<i64> {
    (0..n).map(|_| generate_random_id()).collect()
}

pub(crate) fn date(date: i32) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(date as i64, 0).unwrap_or_default()
}

/// Like [`date`], for the fields where Telegram uses `0` to mean "never".
pub(crate) fn date_or_never(date: i32) -> Option<DateTime<Utc>> {
    if date == 0 { None } else { Some(self::date(date)) }
}

pub(crate) fn timestamp(date: DateTime<Utc>) -> i32 {
    date.timestamp().clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
