use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";

/// Session-scoped key-value flags.
///
/// A session is one run of the application. The flags are mirrored to a small
/// JSON file under the OS temp directory while the run lasts, or kept purely
/// in memory when no path is set. The in-memory map is authoritative.
#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl SessionStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Starts this run's session in `dir`. A file left behind by an earlier
    /// run belongs to a finished session and is discarded.
    pub fn begin(dir: &Path) -> Self {
        let path = dir.join(SESSION_FILE);
        if path.exists() {
            match fs::remove_file(&path) {
                Ok(()) => log::debug!("discarded stale session file {}", path.display()),
                Err(e) => log::warn!("could not remove stale session file {}: {}", path.display(), e),
            }
        }
        SessionStore { path: Some(path), values: BTreeMap::new() }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Sets a flag. The value is kept in memory even when the write fails.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    /// Ends the session: every flag is dropped and the file deleted.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.values.clear();
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let s = serde_json::to_string_pretty(&self.values)?;
        atomic_write(path, s.as_bytes())?;
        Ok(())
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    {
        let mut f = File::create(&tmp_path)?;
        f.write_all(data)?;
        f.flush()?;
    }
    fs::rename(tmp_path, path)?;
    Ok(())
}
