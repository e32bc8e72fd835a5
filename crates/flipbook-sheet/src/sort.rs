//! Sort key derivation for the frame sequence
//!
//! One resolver covers all strategies. The capture-time strategy makes
//! the "no usable metadata" case explicit: it yields
//! [`CaptureStamp::Missing`], which orders after every real stamp, so
//! images without EXIF data fall to the end of the sequence in their
//! incoming relative order.

use std::fs;
use std::io::BufReader;
use std::path::Path;
use std::time::SystemTime;

use log::debug;

use crate::types::SortStrategy;

/// Capture timestamp read from image metadata, or the explicit absence
/// of one. `Missing` compares greater than any `Taken` value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CaptureStamp {
    /// EXIF DateTimeOriginal in display form ("YYYY-MM-DD HH:MM:SS"),
    /// which compares chronologically as text
    Taken(String),
    Missing,
}

/// Comparable ordering key for one image under a chosen strategy.
///
/// All keys in a single pass come from the same strategy, so only
/// same-variant comparisons occur in practice; the derived order keeps
/// the type total regardless.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Capture(CaptureStamp),
    Name(String),
    Modified(SystemTime),
    Created(SystemTime),
}

/// Derive the sort key for one image file.
///
/// Metadata read failures never propagate: the capture strategy falls
/// back to `Missing`, the filesystem strategies to the epoch.
pub fn resolve_sort_key(path: &Path, strategy: SortStrategy) -> SortKey {
    match strategy {
        SortStrategy::CaptureTime => SortKey::Capture(read_capture_stamp(path)),
        SortStrategy::Filename => SortKey::Name(file_name_lower(path)),
        SortStrategy::ModifiedTime => SortKey::Modified(
            fs::metadata(path)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH),
        ),
        SortStrategy::CreatedTime => SortKey::Created(
            fs::metadata(path)
                .and_then(|m| m.created())
                .unwrap_or(SystemTime::UNIX_EPOCH),
        ),
    }
}

/// Stable-sort paths by their resolved keys. Ties keep input order.
pub fn sort_by_strategy(paths: &mut Vec<std::path::PathBuf>, strategy: SortStrategy) {
    let mut keyed: Vec<(std::path::PathBuf, SortKey)> = paths
        .drain(..)
        .map(|p| {
            let key = resolve_sort_key(&p, strategy);
            debug!("sort key for {}: {:?}", p.display(), key);
            (p, key)
        })
        .collect();
    keyed.sort_by(|a, b| a.1.cmp(&b.1));
    paths.extend(keyed.into_iter().map(|(p, _)| p));
}

fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn read_capture_stamp(path: &Path) -> CaptureStamp {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return CaptureStamp::Missing,
    };
    let mut reader = BufReader::new(file);
    let data = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(d) => d,
        Err(_) => return CaptureStamp::Missing,
    };

    data.get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)
        .map(|field| CaptureStamp::Taken(field.display_value().to_string()))
        .unwrap_or(CaptureStamp::Missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stamp_sorts_after_taken() {
        let taken = CaptureStamp::Taken("2024-03-01 10:00:00".to_string());
        assert!(taken < CaptureStamp::Missing);

        let a = SortKey::Capture(taken);
        let b = SortKey::Capture(CaptureStamp::Missing);
        assert!(a < b);
    }

    #[test]
    fn test_taken_stamps_compare_chronologically() {
        let earlier = CaptureStamp::Taken("2023-12-31 23:59:59".to_string());
        let later = CaptureStamp::Taken("2024-01-01 00:00:00".to_string());
        assert!(earlier < later);
    }

    #[test]
    fn test_name_keys_case_insensitive() {
        let a = resolve_sort_key(Path::new("/tmp/IMG_002.JPG"), SortStrategy::Filename);
        let b = resolve_sort_key(Path::new("/tmp/img_010.jpg"), SortStrategy::Filename);
        assert!(a < b);
    }

    #[test]
    fn test_unreadable_file_degrades_to_missing() {
        let key = resolve_sort_key(
            Path::new("/nonexistent/frame.jpg"),
            SortStrategy::CaptureTime,
        );
        assert_eq!(key, SortKey::Capture(CaptureStamp::Missing));
    }

    #[test]
    fn test_unreadable_file_degrades_to_epoch() {
        let key = resolve_sort_key(
            Path::new("/nonexistent/frame.jpg"),
            SortStrategy::ModifiedTime,
        );
        assert_eq!(key, SortKey::Modified(SystemTime::UNIX_EPOCH));
    }
}
