//! Generic record-collection operations.
//!
//! Every entity collection (customers, contracts, reminders, expenses) is a
//! plain `Vec` of records. The functions here are pure: they never mutate
//! their input and never touch storage. Services load a collection, run one of
//! these, and persist the result.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Picks one text field of a record for searching
pub type FieldSelector<T> = fn(&T) -> &str;

/// A persisted entity with a stable id and creation timestamp.
///
/// `Input` carries every editable field and nothing else, so applying a patch
/// can never change `id` or `created_at`.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Input;

    /// Storage key of this entity's collection
    const COLLECTION_KEY: &'static str;

    fn id(&self) -> &str;

    /// Build a new record from form input plus the generated id and timestamp
    fn from_input(id: String, created_at: String, input: Self::Input) -> Self;

    /// Overwrite every editable field with the patch
    fn apply_patch(&mut self, patch: Self::Input);
}

/// Generate an id that is unique within `records`.
///
/// Ids are epoch-millisecond strings. When two records are created in the same
/// millisecond the candidate is bumped until it is free.
pub fn generate_id<T: Record>(records: &[T], now_millis: i64) -> String {
    let taken: HashSet<&str> = records.iter().map(|r| r.id()).collect();

    let mut candidate = now_millis;
    while taken.contains(candidate.to_string().as_str()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Timestamp format stored in `createdAt`: `2024-01-01T09:30:00.000Z`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Append a new record built from `input`.
///
/// Returns the new record and the full updated collection to persist.
pub fn create<T: Record>(records: &[T], input: T::Input, now: DateTime<Utc>) -> (T, Vec<T>) {
    let id = generate_id(records, now.timestamp_millis());
    let record = T::from_input(id, format_timestamp(now), input);

    let mut updated = records.to_vec();
    updated.push(record.clone());
    (record, updated)
}

/// Replace the editable fields of the record with `id`.
///
/// An unknown id returns the collection unchanged.
pub fn update<T: Record>(records: &[T], id: &str, patch: T::Input) -> Vec<T> {
    let mut updated = records.to_vec();
    if let Some(record) = updated.iter_mut().find(|r| r.id() == id) {
        record.apply_patch(patch);
    }
    updated
}

/// Drop the record with `id`; an unknown id returns the collection unchanged
pub fn remove<T: Record>(records: &[T], id: &str) -> Vec<T> {
    records.iter().filter(|r| r.id() != id).cloned().collect()
}

pub fn find<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}

/// Records where any selected field contains `term`, ignoring case.
///
/// An empty term matches every record. Input order is kept.
pub fn search<T: Clone>(records: &[T], term: &str, fields: &[FieldSelector<T>]) -> Vec<T> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|&record| {
            fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Parse the date formats records carry.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.fff]]` and RFC 3339. Offsets
/// are normalized to UTC; naive values are taken as-is.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    const DATE_TIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// A reordered copy of `records` by the date `selector` returns.
///
/// Stable: records with equal dates keep their input order. Records whose
/// date does not parse go last in either direction.
pub fn sort_by_date<T, F>(records: &[T], selector: F, ascending: bool) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut keyed: Vec<(Option<NaiveDateTime>, &T)> = records
        .iter()
        .map(|record| (parse_date_time(&selector(record)), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) if ascending => a.cmp(b),
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Total of `selector` over all records; missing and non-finite values count as zero
pub fn sum<T, F>(records: &[T], selector: F) -> f64
where
    F: Fn(&T) -> Option<f64>,
{
    records
        .iter()
        .filter_map(selector)
        .filter(|value| value.is_finite())
        .fold(0.0, |total, value| total + value)
}
