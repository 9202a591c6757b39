use std::path::{Path, PathBuf};

/// A local file chosen for upload. Only the name and size are read at
/// selection time; the bytes are read when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size: metadata.len(),
        })
    }

    /// Display name suggested for the upload: the file name without its
    /// trailing extension.
    pub fn default_name(&self) -> String {
        strip_extension(&self.file_name).to_string()
    }
}

/// Removes the last `.ext` suffix. A trailing dot with nothing after it is
/// not an extension.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => &file_name[..idx],
        _ => file_name,
    }
}

/// File and metadata collected by the form, waiting to be submitted.
#[derive(Debug, Clone, Default)]
pub struct PendingUpload {
    pub file: Option<SelectedFile>,
    pub name: String,
    pub description: String,
}

impl PendingUpload {
    pub fn select(&mut self, file: SelectedFile) {
        self.name = file.default_name();
        self.file = Some(file);
    }

    pub fn clear(&mut self) {
        *self = PendingUpload::default();
    }
}

/// The four multipart fields sent to the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub user_email: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(name: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            file_name: name.to_string(),
            size: 0,
        }
    }

    #[test]
    fn default_name_strips_last_extension() {
        assert_eq!(selected("clip.MOV").default_name(), "clip");
        assert_eq!(selected("holiday.tar.gz").default_name(), "holiday.tar");
        assert_eq!(selected("README").default_name(), "README");
    }

    #[test]
    fn trailing_dot_and_dotfiles() {
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension(".hidden"), "");
    }

    #[test]
    fn selecting_replaces_name_but_keeps_description() {
        let mut pending = PendingUpload::default();
        pending.description = "sunset".to_string();
        pending.select(selected("beach.png"));
        assert_eq!(pending.name, "beach");
        assert_eq!(pending.description, "sunset");

        pending.select(selected("clip.MOV"));
        assert_eq!(pending.name, "clip");

        pending.clear();
        assert!(pending.file.is_none());
        assert!(pending.name.is_empty());
        assert!(pending.description.is_empty());
    }

    #[test]
    fn from_path_reads_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.MOV");
        std::fs::write(&path, b"12345").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.file_name, "clip.MOV");
        assert_eq!(file.size, 5);
        assert_eq!(file.default_name(), "clip");
    }
}
