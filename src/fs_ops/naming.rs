//! File name transformation.
//! Splits a name at its last extension separator and rebuilds it with the
//! move marker wedged between stem and extension.

use crate::errors::DerpMoveError;

/// Marker appended to the stem of every moved file.
pub const MOVE_MARKER: &str = "_derp_i_moved_this_thing";

/// Separator between a file's stem and its extension.
pub const EXTENSION_SEPARATOR: char = '.';

/// Derive the destination name for `name`.
///
/// The split is right-most and happens exactly once, so only the final
/// `.`-delimited suffix counts as the extension: `archive.tar.gz` becomes
/// `archive.tar_derp_i_moved_this_thing.gz`.
///
/// A name without a separator has no extension to reattach; such names are
/// rejected with a NameFormat error rather than silently mangled.
pub fn transform_file_name(name: &str) -> Result<String, DerpMoveError> {
    let split = name
        .rfind(EXTENSION_SEPARATOR)
        .ok_or_else(|| DerpMoveError::NameFormat {
            name: name.to_string(),
            reason: format!("no '{EXTENSION_SEPARATOR}' separator in name"),
        })?;
    let stem = &name[..split];
    let ext = &name[split + EXTENSION_SEPARATOR.len_utf8()..];
    Ok(format!("{stem}{MOVE_MARKER}{EXTENSION_SEPARATOR}{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_extension() {
        assert_eq!(
            transform_file_name("photo.jpg").unwrap(),
            "photo_derp_i_moved_this_thing.jpg"
        );
    }

    #[test]
    fn only_last_dot_counts() {
        assert_eq!(
            transform_file_name("archive.tar.gz").unwrap(),
            "archive.tar_derp_i_moved_this_thing.gz"
        );
    }

    #[test]
    fn dotfile_has_empty_stem() {
        assert_eq!(
            transform_file_name(".bashrc").unwrap(),
            "_derp_i_moved_this_thing.bashrc"
        );
    }

    #[test]
    fn trailing_dot_keeps_empty_extension() {
        assert_eq!(
            transform_file_name("notes.").unwrap(),
            "notes_derp_i_moved_this_thing."
        );
    }

    #[test]
    fn no_separator_is_rejected() {
        let err = transform_file_name("README").unwrap_err();
        assert_eq!(err.code(), "name_format");
        assert!(format!("{err}").contains("README"));
    }

    #[test]
    fn split_round_trips() {
        for name in ["a.txt", "b.png", "archive.tar.gz", "x.y.z.w"] {
            let out = transform_file_name(name).unwrap();
            let rebuilt = out.replacen(MOVE_MARKER, "", 1);
            assert_eq!(rebuilt, name, "marker removal should recover {name}");
        }
    }
}
