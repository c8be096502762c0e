//! Filesystem, timestamp and assertion helpers.

use std::any::{TypeId, type_name};
use std::fmt::{Debug, Write as _};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Error;

/// `strftime` pattern for the date part of a timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `strftime` pattern for the time part of a timestamp.
pub const TIME_FORMAT: &str = "%Hh%Mm%Ss";

/// [`DATE_FORMAT`] and [`TIME_FORMAT`] joined by `_`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%Hh%Mm%Ss";

/// Creates every directory in `folders` under `root` that does not exist
/// yet, including missing parents.
///
/// Returns the directories that were created, in input order.
///
/// # Errors
///
/// Returns the first I/O error raised while creating a directory.
/// Directories created before the failure are left in place.
///
/// # Examples
///
/// ```
/// use pointfree::utils::ensure_directories;
///
/// let root = std::env::temp_dir().join("pointfree-ensure-directories-doc");
/// let created = ensure_directories(&root, ["logs", "out/plots"])?;
/// assert!(root.join("out/plots").is_dir());
///
/// // Existing directories are skipped.
/// assert!(ensure_directories(&root, ["logs"])?.is_empty());
/// # let _ = created;
/// # std::fs::remove_dir_all(&root)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn ensure_directories<P, I>(root: P, folders: I) -> io::Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let root = root.as_ref();
    let mut created = Vec::new();
    for folder in folders {
        let directory = root.join(folder);
        if directory.exists() {
            continue;
        }
        std::fs::create_dir_all(&directory)?;
        tracing::debug!(directory = %directory.display(), "created directory");
        created.push(directory);
    }
    Ok(created)
}

/// Returns the local time formatted with [`DATETIME_FORMAT`].
///
/// # Examples
///
/// ```
/// use pointfree::utils::timestamp;
///
/// let stamp = timestamp();
/// assert_eq!(stamp.len(), "2024-01-31_12h05m09s".len());
/// ```
#[must_use]
pub fn timestamp() -> String {
    Local::now().format(DATETIME_FORMAT).to_string()
}

/// Returns the local time formatted with a custom `strftime` pattern.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `format` contains an unknown
/// specifier.
pub fn timestamp_with(format: &str) -> Result<String, Error> {
    let mut stamp = String::new();
    write!(stamp, "{}", Local::now().format(format)).map_err(|_| Error::InvalidArgument {
        argument: "format",
        expected: "a valid strftime pattern",
        actual: format.to_string(),
    })?;
    Ok(stamp)
}

/// Raised by the `assert_*_one_of` helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    /// A value was not among the allowed values.
    #[error("value of {value} is not in {allowed}")]
    Value {
        /// Debug rendering of the rejected value.
        value: String,
        /// Debug rendering of the allowed values.
        allowed: String,
    },
    /// A type was not among the allowed types.
    #[error("type {type_name} is not in {allowed:?}")]
    Type {
        /// Name of the rejected type.
        type_name: &'static str,
        /// Names of the allowed types.
        allowed: Vec<&'static str>,
    },
}

/// Checks that `value` equals one of `allowed`.
///
/// # Errors
///
/// Returns [`AssertionError::Value`] otherwise.
///
/// # Examples
///
/// ```
/// use pointfree::utils::assert_value_one_of;
///
/// assert!(assert_value_one_of(&"csv", &["csv", "json"]).is_ok());
/// let error = assert_value_one_of(&7, &[1, 2]).unwrap_err();
/// assert_eq!(error.to_string(), "value of 7 is not in [1, 2]");
/// ```
pub fn assert_value_one_of<T>(value: &T, allowed: &[T]) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
{
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(AssertionError::Value {
            value: format!("{value:?}"),
            allowed: format!("{allowed:?}"),
        })
    }
}

/// A type identity paired with its name, for [`assert_type_one_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The name of the tagged type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Checks that `T` is one of the `allowed` types.
///
/// # Errors
///
/// Returns [`AssertionError::Type`] otherwise.
///
/// # Examples
///
/// ```
/// use pointfree::utils::{TypeTag, assert_type_one_of};
///
/// let numeric = [TypeTag::of::<i32>(), TypeTag::of::<f64>()];
/// assert!(assert_type_one_of::<f64>(&numeric).is_ok());
/// assert!(assert_type_one_of::<String>(&numeric).is_err());
/// ```
pub fn assert_type_one_of<T: ?Sized + 'static>(allowed: &[TypeTag]) -> Result<(), AssertionError> {
    let tag = TypeTag::of::<T>();
    if allowed.iter().any(|candidate| candidate.id == tag.id) {
        Ok(())
    } else {
        Err(AssertionError::Type {
            type_name: tag.name,
            allowed: allowed.iter().map(TypeTag::name).collect(),
        })
    }
}
