//! I/O error enrichment.
//! Attaches the operation, the path, and a platform-aware hint to an
//! io::Error before it bubbles up through anyhow.

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        match code {
            libc::EACCES | libc::EPERM => {
                msg.push_str(" (permission denied; check ownership and write permissions)");
            }
            libc::EXDEV => {
                msg.push_str(" (cross-filesystem; atomic rename not possible)");
            }
            libc::ENOENT => {
                msg.push_str(" (path not found; verify it exists)");
            }
            libc::EEXIST => {
                msg.push_str(" (already exists; remove the target or pick another name)");
            }
            libc::ENOSPC => {
                msg.push_str(" (insufficient space on device)");
            }
            _ => {}
        }
        #[cfg(windows)]
        match code {
            5 => msg.push_str(" (access denied; check permissions)"),
            17 => msg.push_str(" (not same device; cross-filesystem move)"),
            2 | 3 => msg.push_str(" (path not found; verify it exists)"),
            80 => msg.push_str(" (already exists; remove the target or pick another name)"),
            112 => msg.push_str(" (insufficient disk space)"),
            _ => {}
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" (permission denied; check ownership and write permissions)");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" (path not found; verify it exists)");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" (already exists; remove the target or pick another name)");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error
/// into an anyhow::Error with an enriched message.
pub(super) fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
