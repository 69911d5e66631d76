use crate::models::ClassDocument;
use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(PathBuf),
    #[error("Malformed document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One gathered file, relative to the source root it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub root: PathBuf,
    pub path: RelativePathBuf,
}

impl SourceFile {
    pub fn absolute(&self) -> PathBuf {
        self.path.to_path(&self.root)
    }
}

/// Every matching file under a set of roots, concatenated in visit order.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    pub files: Vec<SourceFile>,
    pub content: String,
}

/// Which files to pick up while walking a source root.
#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    /// Final extensions including the dot, e.g. `.kt`
    pub extensions: Vec<String>,
    /// Matched against the path relative to its root
    pub exclude: Vec<glob::Pattern>,
}

impl SourceFilter {
    pub fn new(extensions: Vec<String>, exclude: Vec<glob::Pattern>) -> Self {
        Self {
            extensions,
            exclude,
        }
    }

    pub fn accepts(&self, relative: &RelativePath) -> bool {
        let Some(ext) = relative.extension() else {
            return false;
        };
        let has_extension = self
            .extensions
            .iter()
            .any(|wanted| wanted.strip_prefix('.') == Some(ext));
        has_extension
            && !self
                .exclude
                .iter()
                .any(|pattern| pattern.matches(relative.as_str()))
    }
}

/// Walk each root in the order given and concatenate the raw bytes of every
/// accepted file with no separator. Invalid UTF-8 is replaced lossily.
pub fn gather_sources(roots: &[PathBuf], filter: &SourceFilter) -> Result<SourceSet, IoError> {
    let mut files = Vec::new();
    for root in roots {
        validate_source_dir(root)?;
        let mut found = Vec::new();
        scan_directory_recursive(root, root, filter, &mut found)?;
        files.extend(found.into_iter().map(|path| SourceFile {
            root: root.clone(),
            path,
        }));
    }

    let mut bytes = Vec::new();
    for file in &files {
        let absolute = file.absolute();
        log::debug!("Reading {}", absolute.display());
        bytes.extend(fs::read(&absolute)?);
    }

    log::info!(
        "Gathered {} files ({} bytes) from {} source directories",
        files.len(),
        bytes.len(),
        roots.len()
    );

    Ok(SourceSet {
        files,
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Depth-first, entries sorted by name so the walk does not depend on the
/// filesystem's directory order.
fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    filter: &SourceFilter,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            scan_directory_recursive(root, &path, filter, files)?;
        } else if let Ok(stripped) = path.strip_prefix(root)
            && let Ok(relative) = RelativePathBuf::from_path(stripped)
            && filter.accepts(&relative)
        {
            files.push(relative);
        }
    }

    Ok(())
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(path.to_path_buf()));
    }

    Ok(())
}

/// Read an intermediate document written by an earlier run
pub fn read_class_document(path: &Path) -> Result<ClassDocument, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_class_documents(paths: &[PathBuf]) -> Result<Vec<ClassDocument>, IoError> {
    paths.iter().map(|path| read_class_document(path)).collect()
}

/// Write any document as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = to_json(document)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn to_json<T: Serialize>(document: &T) -> Result<String, IoError> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}
