use chrono::{Duration, TimeZone, Utc};

use mailcursor::{
    emails::{Email, EmailStatus},
    MemoryEmailStore,
};

/// Pending emails created one second apart, so ids come back in order.
pub fn pending_emails(ids: impl IntoIterator<Item = i64>) -> Vec<Email> {
    let start = Utc.with_ymd_and_hms(2013, 6, 1, 8, 0, 0).unwrap();
    ids.into_iter()
        .enumerate()
        .map(|(n, id)| {
            let mut email = Email::pending(id, "ORDER_CONFIRMATION", format!("body {id}").into_bytes());
            email.date_create = start + Duration::seconds(n as i64);
            email.date_update = email.date_create;
            email
        })
        .collect()
}

pub fn seeded_store(pending: impl IntoIterator<Item = i64>, sent: impl IntoIterator<Item = i64>) -> MemoryEmailStore {
    let mut emails = pending_emails(pending);
    emails.extend(pending_emails(sent).into_iter().map(|mut email| {
        email.status = EmailStatus::Sent;
        email
    }));
    emails.into_iter().collect()
}
