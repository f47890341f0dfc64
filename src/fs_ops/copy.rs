//! Copy-then-delete fallback for cross-device moves.
//! - Streams the source into a unique temp file next to the destination
//! - Fsyncs the temp file before renaming it into place
//! - Deletes the source only once the destination rename has succeeded

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use super::atomic::try_rename;
use super::helpers::io_error_with_help;
use super::util;

/// Copy `src` into place at `dest` via a temp file, then remove `src`.
/// The source survives until the destination is confirmed written, so a
/// crash mid-way leaves the original intact (plus, at worst, a stale temp
/// file in the destination directory).
pub(super) fn safe_copy_and_remove(src: &Path, dest: &Path) -> Result<()> {
    safe_copy_and_rename(src, dest)?;
    fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
    Ok(())
}

/// Core: copy src -> temp in dest dir, then rename temp -> dest.
pub(super) fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    let tmp_path = util::unique_temp_path(dest_dir);

    if let Err(e) = copy_streaming(src, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("copy to temporary file", &tmp_path)(e));
    }

    if let Err(e) = try_rename(&tmp_path, dest) {
        // Best-effort cleanup of the temp file on failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    Ok(())
}

/// Buffered copy with create_new on the temp target (never clobbers) and a
/// final sync_all so the bytes are on disk before the rename happens.
fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    const BUF_SIZE: usize = 1024 * 1024;

    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}
