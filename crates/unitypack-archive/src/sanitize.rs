use std::path::PathBuf;

use crate::error::{Error, Result};

/// Parse a `pathname` payload into a relative path using host separators.
///
/// The payload is trimmed and only its first line is kept. Anything after
/// the first line is discarded: older packages append a second line (such
/// as `00`) after the path. Both `/` and `\` separate components. `.` and
/// empty components are dropped and `..` pops, but may never climb above
/// the output root.
pub fn parse_path_name(identifier: &str, raw: &[u8]) -> Result<PathBuf> {
    let text = std::str::from_utf8(raw).map_err(|e| Error::InvalidPathName {
        identifier: identifier.to_owned(),
        reason: e.to_string(),
    })?;

    let line = text.trim().lines().next().unwrap_or_default().trim();
    let escape = || Error::PathEscape {
        identifier: identifier.to_owned(),
        path: line.to_owned(),
    };

    if line.starts_with(['/', '\\']) || has_drive_prefix(line) {
        return Err(escape());
    }

    let mut components: Vec<&str> = Vec::new();
    for part in line.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => {
                components.pop().ok_or_else(escape)?;
            }
            part => components.push(part),
        }
    }

    if components.is_empty() {
        return Err(Error::InvalidPathName {
            identifier: identifier.to_owned(),
            reason: "empty path".to_owned(),
        });
    }

    Ok(components.into_iter().collect())
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(raw: &str) -> Result<PathBuf> {
        parse_path_name("id", raw.as_bytes())
    }

    #[test]
    fn plain_path() {
        assert_eq!(
            parse("Assets/Textures/Rock.png").unwrap(),
            Path::new("Assets").join("Textures").join("Rock.png")
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            parse("  Scripts/Move.cs\r\n").unwrap(),
            Path::new("Scripts").join("Move.cs")
        );
    }

    #[test]
    fn keeps_first_line_only() {
        assert_eq!(
            parse("Assets/Old.prefab\n00").unwrap(),
            Path::new("Assets").join("Old.prefab")
        );
    }

    #[test]
    fn normalises_backslashes() {
        assert_eq!(
            parse("Assets\\Models\\.\\Tree.fbx").unwrap(),
            Path::new("Assets").join("Models").join("Tree.fbx")
        );
    }

    #[test]
    fn inner_parent_dir_is_resolved() {
        assert_eq!(parse("a/../b.txt").unwrap(), Path::new("b.txt"));
    }

    #[test]
    fn rejects_escape() {
        assert!(matches!(parse("../evil"), Err(Error::PathEscape { .. })));
        assert!(matches!(parse("a/../../evil"), Err(Error::PathEscape { .. })));
        assert!(matches!(parse("/etc/passwd"), Err(Error::PathEscape { .. })));
        assert!(matches!(parse("C:\\evil"), Err(Error::PathEscape { .. })));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(parse("  \n "), Err(Error::InvalidPathName { .. })));
        assert!(matches!(parse("./."), Err(Error::InvalidPathName { .. })));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_path_name("id", &[0xFF, 0xFE, b'a']).unwrap_err();
        assert!(matches!(err, Error::InvalidPathName { .. }));
    }
}
