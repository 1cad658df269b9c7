//! Image source contract and filesystem implementation.

use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Per-image load failure.
#[derive(Debug)]
pub enum ImageError {
    /// No file at the resolved path.
    NotFound(PathBuf),
    /// Path is absolute or climbs out of the image root.
    OutsideRoot(String),
    /// File exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ImageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "image not found: {}", path.display()),
            Self::OutsideRoot(path) => {
                write!(f, "image path `{path}` must stay inside the image root")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read image `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::OutsideRoot(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Capability for resolving record image paths.
pub trait ImageSource {
    /// Whether an image is available at `image_path`.
    fn exists(&self, image_path: &str) -> bool;
    /// Raw image bytes for `image_path`.
    fn load(&self, image_path: &str) -> Result<Vec<u8>, ImageError>;
}

/// Reads images from the local filesystem.
///
/// Record paths are resolved against `root` when one is set, and against the
/// working directory otherwise. Absolute paths and `..` segments are refused.
#[derive(Debug, Clone, Default)]
pub struct FsImageSource {
    root: Option<PathBuf>,
}

impl FsImageSource {
    /// Resolves paths against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self, image_path: &str) -> Result<PathBuf, ImageError> {
        let path = Path::new(image_path);
        let contained = path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !contained || image_path.is_empty() {
            return Err(ImageError::OutsideRoot(image_path.to_string()));
        }
        Ok(match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        })
    }
}

impl ImageSource for FsImageSource {
    fn exists(&self, image_path: &str) -> bool {
        self.resolve(image_path)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn load(&self, image_path: &str) -> Result<Vec<u8>, ImageError> {
        let path = self.resolve(image_path).map_err(|err| {
            warn!("event=image_load module=assets status=rejected error={err}");
            err
        })?;
        std::fs::read(&path).map_err(|source| {
            warn!(
                "event=image_load module=assets status=error path={} error={}",
                path.display(),
                source
            );
            if source.kind() == ErrorKind::NotFound {
                ImageError::NotFound(path)
            } else {
                ImageError::Io { path, source }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FsImageSource, ImageError, ImageSource};

    #[test]
    fn relative_paths_resolve_under_root() {
        let source = FsImageSource::with_root("/srv/archive");
        assert_eq!(
            source.resolve("images/shaniwar.jpg").expect("resolve"),
            std::path::PathBuf::from("/srv/archive/images/shaniwar.jpg")
        );
        assert_eq!(
            source.resolve("./images/wada.jpg").expect("resolve"),
            std::path::PathBuf::from("/srv/archive/images/wada.jpg")
        );
    }

    #[test]
    fn absolute_and_parent_paths_are_refused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("images");
        std::fs::create_dir_all(&root).expect("create root");
        std::fs::write(dir.path().join("secret.txt"), b"secret").expect("write");
        let source = FsImageSource::with_root(&root);

        let escaped = source.load("../secret.txt").expect_err("parent path must fail");
        assert!(matches!(escaped, ImageError::OutsideRoot(_)));
        assert!(!source.exists("../secret.txt"));

        let absolute = dir.path().join("secret.txt").display().to_string();
        assert!(matches!(
            source.load(&absolute),
            Err(ImageError::OutsideRoot(_))
        ));
        assert!(matches!(
            FsImageSource::new().resolve("nested/../../etc/passwd"),
            Err(ImageError::OutsideRoot(_))
        ));
        assert!(matches!(source.resolve(""), Err(ImageError::OutsideRoot(_))));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = FsImageSource::with_root(dir.path());

        assert!(!source.exists("missing.png"));
        let err = source.load("missing.png").expect_err("missing file must fail");
        assert!(matches!(err, ImageError::NotFound(_)));
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G']).expect("write");
        let source = FsImageSource::with_root(dir.path());

        assert!(source.exists("logo.png"));
        assert_eq!(
            source.load("logo.png").expect("load"),
            vec![0x89, b'P', b'N', b'G']
        );
    }
}
