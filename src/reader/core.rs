use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use glam::Vec3;

use crate::{
    build_bindings,
    error::{AccessError, LoadError, ReaderError},
    interpreter::{
        evaluator::core::Bindings,
        value::{core::Value, kind::ValueKind},
    },
    reader::suggest::best_match,
};

/// A properties file loaded into typed bindings, reloadable at runtime.
///
/// A `Reader` only exists in a loaded state: construction fails unless the
/// file lexes, parses and evaluates. Call [`Reader::update_changes`] once per
/// frame to pick up edits to the file.
///
/// # Example
/// ```no_run
/// use hotprops::Reader;
///
/// let mut reader = Reader::new("res/runtime.properties")?;
/// loop {
///     reader.update_changes()?;
///     let fovy = reader.get_float("fovy")?;
///     let cam_pos = reader.get_vec3("cam_pos")?;
///     # let _ = (fovy, cam_pos);
///     # break;
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Reader {
    path:          PathBuf,
    last_modified: SystemTime,
    bindings:      Bindings,
}

impl Reader {
    /// Loads the properties file at `path`.
    ///
    /// # Errors
    /// - [`ReaderError::Io`] if the file can't be stat'ed or read.
    /// - [`ReaderError::Load`] if it fails to lex, parse or evaluate.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ReaderError> {
        let path = path.into();
        let last_modified = modified_time(&path)?;
        let contents = read_source(&path)?;

        let bindings = build_bindings(&contents).map_err(|source| {
                                                  log::error!("{}: {source}", path.display());
                                                  ReaderError::Load { path: path.clone(),
                                                                      source }
                                              })?;

        log::info!("loaded {} properties from {}", bindings.len(), path.display());
        Ok(Self { path,
                  last_modified,
                  bindings })
    }

    /// Reloads the file if its modification time changed since the last
    /// check.
    ///
    /// The new bindings are built aside and swapped in only when the whole
    /// pipeline succeeds. The new modification time is recorded before the
    /// rebuild, so a broken edit is reported once rather than on every call.
    ///
    /// # Returns
    /// `true` if the bindings were replaced.
    ///
    /// # Errors
    /// - [`ReaderError::Io`] if the file can't be stat'ed or read.
    /// - [`ReaderError::ReloadFailed`] if the new content fails to load. The
    ///   previous bindings stay in place.
    pub fn update_changes(&mut self) -> Result<bool, ReaderError> {
        let modified = modified_time(&self.path)?;
        if modified == self.last_modified {
            return Ok(false);
        }
        self.last_modified = modified;

        let contents = read_source(&self.path)?;
        let bindings = build_bindings(&contents).map_err(|source| self.reload_failed(source))?;

        self.bindings = bindings;
        log::info!("reloaded {} properties from {}",
                   self.bindings.len(),
                   self.path.display());
        Ok(true)
    }

    /// The properties file this reader was built from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All current bindings.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Returns `true` if a property named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if the file defines no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Looks up a property of any kind.
    ///
    /// # Errors
    /// [`AccessError::NotFound`], with a suggestion when an existing name is
    /// close enough.
    pub fn get_value(&self, name: &str) -> Result<&Value, AccessError> {
        self.bindings.get(name).ok_or_else(|| {
                                   let suggestion = best_match(name, self.bindings.keys().map(String::as_str));
                                   let error = AccessError::NotFound { name:       name.to_string(),
                                                                       path:       self.path.clone(),
                                                                       suggestion: suggestion.map(str::to_string), };
                                   log::error!("{error}");
                                   error
                               })
    }

    /// Looks up a string property.
    ///
    /// # Errors
    /// [`AccessError::NotFound`] or [`AccessError::TypeMismatch`].
    pub fn get_string(&self, name: &str) -> Result<&str, AccessError> {
        let value = self.get_value(name)?;
        value.as_str().ok_or_else(|| self.mismatch(name, ValueKind::String, value))
    }

    /// Looks up a float property.
    ///
    /// # Errors
    /// [`AccessError::NotFound`] or [`AccessError::TypeMismatch`].
    pub fn get_float(&self, name: &str) -> Result<f32, AccessError> {
        let value = self.get_value(name)?;
        value.as_float().ok_or_else(|| self.mismatch(name, ValueKind::Float, value))
    }

    /// Looks up a vec3 property.
    ///
    /// # Errors
    /// [`AccessError::NotFound`] or [`AccessError::TypeMismatch`].
    pub fn get_vec3(&self, name: &str) -> Result<Vec3, AccessError> {
        let value = self.get_value(name)?;
        value.as_vec3().ok_or_else(|| self.mismatch(name, ValueKind::Vec3, value))
    }

    /// Looks up a bool property.
    ///
    /// # Errors
    /// [`AccessError::NotFound`] or [`AccessError::TypeMismatch`].
    pub fn get_bool(&self, name: &str) -> Result<bool, AccessError> {
        let value = self.get_value(name)?;
        value.as_bool().ok_or_else(|| self.mismatch(name, ValueKind::Bool, value))
    }

    fn mismatch(&self, name: &str, requested: ValueKind, value: &Value) -> AccessError {
        let error = AccessError::TypeMismatch { name: name.to_string(),
                                                requested,
                                                actual: value.kind(),
                                                path: self.path.clone() };
        log::error!("{error}");
        error
    }

    fn reload_failed(&self, source: LoadError) -> ReaderError {
        log::error!("{}: {source}", self.path.display());
        ReaderError::ReloadFailed { path: self.path.clone(),
                                    source }
    }
}

fn modified_time(path: &Path) -> Result<SystemTime, ReaderError> {
    fs::metadata(path).and_then(|metadata| metadata.modified())
                      .map_err(|source| ReaderError::Io { path: path.to_path_buf(),
                                                          source })
}

fn read_source(path: &Path) -> Result<String, ReaderError> {
    fs::read_to_string(path).map_err(|source| ReaderError::Io { path: path.to_path_buf(),
                                                                source })
}
