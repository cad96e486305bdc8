use anyhow::{Result, Context};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @const: Directory created next to inputs when no output dir is given
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "captions";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }

    // @generates: Output prefix for a caption input
    // @params: input_file, output_dir (defaults to `<input parent>/captions`), explicit prefix name
    pub fn output_prefix<P: AsRef<Path>>(
        input_file: P,
        output_dir: Option<&Path>,
        prefix_name: Option<&str>,
    ) -> PathBuf {
        let input_file = input_file.as_ref();

        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_file
                .parent()
                .unwrap_or(Path::new("."))
                .join(DEFAULT_OUTPUT_DIR_NAME),
        };

        let name = match prefix_name {
            Some(name) => name.to_string(),
            None => input_file
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "captions".to_string()),
        };

        dir.join(name)
    }

    /// Whether two paths name the same file once `.`, `..` and symlinks are
    /// resolved. Either path may not exist yet.
    pub fn same_file<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> Result<bool> {
        Ok(Self::resolve_path(a.as_ref())? == Self::resolve_path(b.as_ref())?)
    }

    // @resolves: Absolute path, canonical as far as it exists and lexical after that
    fn resolve_path(path: &Path) -> Result<PathBuf> {
        let absolute = std::path::absolute(path)
            .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

        let mut resolved = PathBuf::new();
        for component in absolute.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => {
                    resolved.push(other);
                    if let Ok(real) = fs::canonicalize(&resolved) {
                        resolved = real;
                    }
                }
            }
        }

        Ok(resolved)
    }

    /// Find files with a specific extension directly inside a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let wanted = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(wanted) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
