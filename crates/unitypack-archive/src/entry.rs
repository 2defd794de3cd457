/// Record basename carrying the asset payload.
pub const CONTENT_NAME: &str = "asset";
/// Record basename carrying the optional metadata sidecar.
pub const META_NAME: &str = "asset.meta";
/// Record basename carrying the asset's relative output path.
pub const PATHNAME_NAME: &str = "pathname";

/// Role of a record within its identifier group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Content,
    MetaContent,
    PathName,
    /// Directory placeholders, empty records and unknown basenames.
    Other,
}

impl EntryKind {
    pub fn from_basename(basename: &str) -> Self {
        match basename {
            CONTENT_NAME => Self::Content,
            META_NAME => Self::MetaContent,
            PATHNAME_NAME => Self::PathName,
            _ => Self::Other,
        }
    }
}

/// One record of a package, with its payload not yet consumed.
#[derive(Debug)]
pub struct Entry<R> {
    pub identifier: String,
    pub kind: EntryKind,
    pub size: u64,
    pub payload: R,
}

impl<R> Entry<R> {
    pub fn new(identifier: impl Into<String>, kind: EntryKind, size: u64, payload: R) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            size,
            payload,
        }
    }

    /// Build an entry from a raw `<identifier>/<basename>` record name.
    pub fn from_record(name: &str, size: u64, payload: R) -> Self {
        let (identifier, kind) = classify(name, size);
        Self::new(identifier, kind, size, payload)
    }
}

/// Split a record name into its identifier and kind.
///
/// Names are normalised first: trailing slashes and a leading `./` are
/// dropped. The identifier is everything before the last `/` and may itself
/// contain separators. Records with no identifier, an identifier equal to the
/// basename, or fewer than one byte of payload are `Other`.
pub fn classify(name: &str, size: u64) -> (&str, EntryKind) {
    let name = name.trim_end_matches('/');
    let name = name.strip_prefix("./").unwrap_or(name);

    let Some((identifier, basename)) = name.rsplit_once('/') else {
        return (name, EntryKind::Other);
    };

    if identifier.is_empty() || identifier == basename || size < 1 {
        return (identifier, EntryKind::Other);
    }

    (identifier, EntryKind::from_basename(basename))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0a1b2c3d4e5f60718293a4b5c6d7e8f9";

    #[test]
    fn classify_known_basenames() {
        assert_eq!(
            classify(&format!("{ID}/asset"), 10),
            (ID, EntryKind::Content)
        );
        assert_eq!(
            classify(&format!("{ID}/asset.meta"), 10),
            (ID, EntryKind::MetaContent)
        );
        assert_eq!(
            classify(&format!("{ID}/pathname"), 10),
            (ID, EntryKind::PathName)
        );
    }

    #[test]
    fn classify_unknown_basename() {
        assert_eq!(
            classify(&format!("{ID}/preview.png"), 10),
            (ID, EntryKind::Other)
        );
    }

    #[test]
    fn classify_directory_placeholder() {
        assert_eq!(classify(&format!("{ID}/"), 0).1, EntryKind::Other);
        assert_eq!(classify(ID, 0).1, EntryKind::Other);
        assert_eq!(classify("abc/abc", 10).1, EntryKind::Other);
    }

    #[test]
    fn classify_empty_record() {
        assert_eq!(classify(&format!("{ID}/asset"), 0), (ID, EntryKind::Other));
        assert_eq!(classify(&format!("{ID}/pathname"), 0).1, EntryKind::Other);
    }

    #[test]
    fn classify_strips_leading_dot() {
        assert_eq!(
            classify(&format!("./{ID}/asset"), 3),
            (ID, EntryKind::Content)
        );
    }

    #[test]
    fn classify_keeps_nested_identifier() {
        assert_eq!(classify("grp/abc/asset", 3), ("grp/abc", EntryKind::Content));
        assert_eq!(
            classify("./grp/abc/pathname", 12),
            ("grp/abc", EntryKind::PathName)
        );
    }

    #[test]
    fn classify_rejects_missing_identifier() {
        assert_eq!(classify("/asset", 3).1, EntryKind::Other);
        assert_eq!(classify("asset", 3).1, EntryKind::Other);
    }

    #[test]
    fn entry_from_record() {
        let entry = Entry::from_record(&format!("{ID}/asset.meta"), 4, &b"meta"[..]);
        assert_eq!(entry.identifier, ID);
        assert_eq!(entry.kind, EntryKind::MetaContent);
        assert_eq!(entry.size, 4);
    }
}
