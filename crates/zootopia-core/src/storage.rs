//! Template read and page write.
//!
//! Both are fatal on failure. The page is written to a temp file in the
//! destination directory and renamed over the target, so an interrupted run
//! leaves either the previous page or the new one, never a partial file.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Reads the HTML template.
pub fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("could not read HTML template {}", path.display()))
}

/// Writes `html` to `path`, replacing any existing file. Missing parent
/// directories are created.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if dir.exists() && !dir.is_dir() {
        anyhow::bail!("path exists but is not a directory: {}", dir.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create output directory {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("could not create temp file in {}", dir.display()))?;
    tmp.write_all(html.as_bytes())
        .with_context(|| format!("could not write page for {}", path.display()))?;
    tmp.flush()?;
    carry_permissions(tmp.as_file(), path)?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("could not write to file {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

/// Temp files are created owner-only; give the page the mode of the file it
/// replaces, or a world-readable 0644 when it is new.
fn carry_permissions(tmp: &fs::File, target: &Path) -> Result<()> {
    let perms = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => default_permissions(tmp)?,
    };
    tmp.set_permissions(perms)
        .with_context(|| format!("could not set permissions for {}", target.display()))
}

#[cfg(unix)]
fn default_permissions(_tmp: &fs::File) -> Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(tmp: &fs::File) -> Result<fs::Permissions> {
    Ok(tmp.metadata()?.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.html");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();
        write_page(&path, "new").unwrap();
        assert_eq!(mode(&path), 0o664);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn new_page_is_world_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.html");
        write_page(&path, "x").unwrap();
        assert_eq!(mode(&path), 0o644);
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.html");
        write_page(&path, "<html>one</html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>one</html>");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.html");
        fs::write(&path, "old content that is longer").unwrap();
        write_page(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("out").join("animals.html");
        write_page(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.html");
        write_page(&path, "x").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "i am a file").unwrap();
        let err = write_page(&blocker.join("animals.html"), "x").unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_template(&dir.path().join("nope.html")).unwrap_err();
        assert!(format!("{:#}", err).contains("could not read HTML template"));
    }
}
