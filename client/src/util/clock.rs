//! Local wall-clock time used to stamp the loan form.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{OffsetDateTime, PrimitiveDateTime};

/// Build a local timestamp from JS `Date` components (month is zero-based).
#[cfg(any(test, feature = "csr"))]
fn from_js_parts(year: i32, month0: u32, day: u32, hour: u32, minute: u32) -> Option<PrimitiveDateTime> {
    let month = time::Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    let date = time::Date::from_calendar_date(year, month, u8::try_from(day).ok()?).ok()?;
    date.with_hms(u8::try_from(hour).ok()?, u8::try_from(minute).ok()?, 0).ok()
}

#[cfg(any(test, feature = "csr"))]
fn epoch() -> PrimitiveDateTime {
    PrimitiveDateTime::new(OffsetDateTime::UNIX_EPOCH.date(), OffsetDateTime::UNIX_EPOCH.time())
}

/// Current local date and time as the browser sees it.
pub fn now() -> PrimitiveDateTime {
    #[cfg(feature = "csr")]
    {
        let js = js_sys::Date::new_0();
        let year = i32::try_from(js.get_full_year()).unwrap_or(1970);
        from_js_parts(year, js.get_month(), js.get_date(), js.get_hours(), js.get_minutes()).unwrap_or_else(epoch)
    }
    #[cfg(not(feature = "csr"))]
    {
        let utc = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc.date(), utc.time())
    }
}
