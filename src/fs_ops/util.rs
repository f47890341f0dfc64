use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub(super) fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let mut p = dst_dir.to_path_buf();
    p.push(format!(".derp_move.{}.{}.tmp", pid, nanos));
    p
}

pub(super) fn is_cross_device(e: &io::Error) -> bool {
    // std::io::ErrorKind has no CrossDeviceLink variant on stable platforms,
    // so detect EXDEV / ERROR_NOT_SAME_DEVICE via raw OS error codes.
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            if code == libc::EXDEV {
                return true;
            }
        }
        #[cfg(windows)]
        {
            // ERROR_NOT_SAME_DEVICE
            if code == 17 {
                return true;
            }
        }
    }
    false
}

#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = std::fs::File::open(dir)?;
    f.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn temp_paths_live_in_the_given_dir() {
        let td = tempdir().unwrap();
        let p = unique_temp_path(td.path());
        assert_eq!(p.parent(), Some(td.path()));
        let name = p.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".derp_move."));
        assert!(name.ends_with(".tmp"));
    }

    #[cfg(unix)]
    #[test]
    fn exdev_is_cross_device() {
        let e = io::Error::from_raw_os_error(libc::EXDEV);
        assert!(is_cross_device(&e));
        let other = io::Error::from_raw_os_error(libc::ENOENT);
        assert!(!is_cross_device(&other));
    }
}
