//! The defaults layer shape and its shared handle.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use super::{ValidationErrors, check_interval, non_empty};

/// Layer of fallback values, used for both service defaults and hard defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsBase {
    /// Interval between checks. `None` means this layer does not set it.
    #[serde(
        default,
        skip_serializing_if = "non_empty::is_unset",
        deserialize_with = "non_empty::deserialize"
    )]
    pub interval: Option<String>,

    /// Whether versions are compared with semantic versioning rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_versioning: Option<bool>,
}

impl OptionsBase {
    /// Creates a layer. An empty `interval` leaves the interval unset.
    #[must_use]
    pub fn new(interval: impl Into<String>, semantic_versioning: Option<bool>) -> Self {
        Self {
            interval: non_empty::from(interval.into()),
            semantic_versioning,
        }
    }

    /// Wraps this layer in a handle that can be attached to many [`Options`].
    ///
    /// [`Options`]: super::Options
    #[must_use]
    pub fn shared(self) -> SharedBase {
        SharedBase::new(self)
    }

    /// Validates the interval of this layer, normalizing bare seconds in place.
    ///
    /// # Errors
    ///
    /// Returns every failure found, prefixed with `prefix`.
    pub fn check_values(&mut self, prefix: &str) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        check_interval(&mut self.interval, prefix, &mut errs);
        errs.into_result()
    }
}

/// Reference-counted handle to an [`OptionsBase`] layer.
///
/// Cloning the handle shares the layer; it never copies the values. A write
/// through any clone is seen by every holder. Writers are expected to be
/// coordinated by whoever owns the layer (normally [`ValidatedConfig`]).
///
/// [`ValidatedConfig`]: crate::config::ValidatedConfig
#[derive(Debug, Clone, Default)]
pub struct SharedBase(Arc<RwLock<OptionsBase>>);

impl SharedBase {
    /// Creates a new handle owning `base`.
    #[must_use]
    pub fn new(base: OptionsBase) -> Self {
        Self(Arc::new(RwLock::new(base)))
    }

    /// Locks the layer for reading.
    ///
    /// A poisoned lock is recovered: the layer only holds plain values.
    pub fn read(&self) -> RwLockReadGuard<'_, OptionsBase> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the layer for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, OptionsBase> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the layer's interval. An empty value reads as unset.
    #[must_use]
    pub fn interval(&self) -> Option<String> {
        non_empty::get(&self.read().interval).map(str::to_owned)
    }

    /// Returns the layer's semantic versioning flag.
    #[must_use]
    pub fn semantic_versioning(&self) -> Option<bool> {
        self.read().semantic_versioning
    }

    /// Returns a copy of the whole layer.
    #[must_use]
    pub fn snapshot(&self) -> OptionsBase {
        self.read().clone()
    }

    /// Replaces the layer's values, returning the previous ones.
    pub fn replace(&self, base: OptionsBase) -> OptionsBase {
        std::mem::replace(&mut *self.write(), base)
    }

    /// Returns true if both handles point at the same layer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<OptionsBase> for SharedBase {
    fn from(base: OptionsBase) -> Self {
        Self::new(base)
    }
}
