use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

/// Association between the editor buffer and an optional backing file.
///
/// The buffer text itself lives in the FLTK `TextBuffer`; this only tracks
/// which path (if any) the buffer came from or was last saved to. There is
/// no dirty flag: `New` decides whether to prompt by inspecting the buffer
/// text at that moment.
#[derive(Debug, Default)]
pub struct DocumentSession {
    current_path: Option<PathBuf>,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn has_path(&self) -> bool {
        self.current_path.is_some()
    }

    /// Read the whole file and adopt its path. On failure the session is
    /// left untouched so the caller can keep the previous buffer.
    pub fn open(&mut self, path: PathBuf) -> Result<String> {
        let contents = fs::read_to_string(&path)?;
        self.current_path = Some(path);
        Ok(contents)
    }

    /// Overwrite the current file with the full buffer contents.
    /// Callers must check `has_path` first and fall back to `save_as`.
    pub fn save(&self, text: &str) -> Result<()> {
        let path = self
            .current_path
            .as_ref()
            .expect("save called without a current path");
        fs::write(path, text)?;
        Ok(())
    }

    /// Write the buffer to a new path and adopt it. The path is only
    /// adopted after a successful write.
    pub fn save_as(&mut self, path: PathBuf, text: &str) -> Result<()> {
        fs::write(&path, text)?;
        self.current_path = Some(path);
        Ok(())
    }

    /// Detach the buffer from any file (after New).
    pub fn clear(&mut self) {
        self.current_path = None;
    }
}

/// Whether the buffer holds content worth prompting about before New
/// discards it. Whitespace-only buffers are cleared without asking.
pub fn has_unsaved_content(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_reads_contents_and_adopts_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nota.txt");
        fs::write(&path, "ola mundo").unwrap();

        let mut session = DocumentSession::new();
        let contents = session.open(path.clone()).unwrap();
        assert_eq!(contents, "ola mundo");
        assert_eq!(session.current_path(), Some(path.as_path()));
    }

    #[test]
    fn test_open_failure_leaves_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();

        let mut session = DocumentSession::new();
        assert!(session.open(dir.path().join("nao-existe.txt")).is_err());
        assert!(!session.has_path());
    }

    #[test]
    fn test_save_overwrites_current_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nota.txt");
        fs::write(&path, "antes").unwrap();

        let mut session = DocumentSession::new();
        session.open(path.clone()).unwrap();
        session.save("depois").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "depois");
        assert_eq!(session.current_path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_as_writes_and_adopts_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("novo.txt");

        let mut session = DocumentSession::new();
        session.save_as(path.clone(), "conteudo").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "conteudo");
        assert_eq!(session.current_path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_as_failure_keeps_previous_path() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("bom.txt");

        let mut session = DocumentSession::new();
        session.save_as(good.clone(), "x").unwrap();

        // A directory is not writable as a file.
        assert!(session.save_as(dir.path().to_path_buf(), "y").is_err());
        assert_eq!(session.current_path(), Some(good.as_path()));
    }

    #[test]
    fn test_clear_detaches_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nota.txt");

        let mut session = DocumentSession::new();
        session.save_as(path, "x").unwrap();
        session.clear();
        assert!(!session.has_path());
    }

    #[test]
    fn test_whitespace_only_buffer_needs_no_prompt() {
        assert!(!has_unsaved_content(""));
        assert!(!has_unsaved_content("   \n\t  \n"));
        assert!(has_unsaved_content("  a  "));
    }
}
