//! Per-service options and the layered resolution of effective values.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::base::{OptionsBase, SharedBase};
use super::{IntervalError, duration, non_empty};

/// Options configured directly on one monitored service.
///
/// Every field may be left unset, in which case the resolvers fall back to
/// the attached `defaults` layer, then to `hard_defaults`. The two layers are
/// shared handles and are never serialized.
///
/// Field order is the order used by the YAML dump.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Interval between checks.
    #[serde(
        default,
        skip_serializing_if = "non_empty::is_unset",
        deserialize_with = "non_empty::deserialize"
    )]
    pub interval: Option<String>,

    /// Whether versions are compared with semantic versioning rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_versioning: Option<bool>,

    /// Whether the service is checked at all. Unset means active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Service-level defaults.
    #[serde(skip)]
    pub defaults: Option<SharedBase>,

    /// Global hard defaults.
    #[serde(skip)]
    pub hard_defaults: Option<SharedBase>,
}

/// Which layer a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The service's own options.
    Root,
    /// The service defaults layer.
    Defaults,
    /// The global hard defaults layer.
    HardDefaults,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Defaults => "defaults",
            Self::HardDefaults => "hard_defaults",
        };
        f.write_str(name)
    }
}

/// Handle to the layer that currently provides the interval.
///
/// Writes go to that layer. For a shared layer every [`Options`] attached to
/// it sees the write, so callers must coordinate with the layer's owner.
#[derive(Debug)]
pub enum IntervalSlot<'a> {
    /// The service's own interval.
    Root(&'a mut Option<String>),
    /// The interval of the service defaults layer.
    Defaults(SharedBase),
    /// The interval of the hard defaults layer.
    HardDefaults(SharedBase),
}

impl IntervalSlot<'_> {
    /// Returns the layer this slot points into.
    #[must_use]
    pub const fn source(&self) -> Source {
        match self {
            Self::Root(_) => Source::Root,
            Self::Defaults(_) => Source::Defaults,
            Self::HardDefaults(_) => Source::HardDefaults,
        }
    }

    /// Returns the current value held by the layer.
    #[must_use]
    pub fn get(&self) -> String {
        match self {
            Self::Root(interval) => non_empty::get(interval).unwrap_or_default().to_string(),
            Self::Defaults(layer) | Self::HardDefaults(layer) => {
                layer.interval().unwrap_or_default()
            }
        }
    }

    /// Overwrites the value held by the layer. An empty value unsets it.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = non_empty::from(value.into());
        match self {
            Self::Root(interval) => **interval = value,
            Self::Defaults(layer) | Self::HardDefaults(layer) => layer.write().interval = value,
        }
    }
}

impl Options {
    /// Creates options with the given values and attached layers.
    ///
    /// An empty `interval` leaves the interval unset. The layers are shared,
    /// not copied.
    #[must_use]
    pub fn new(
        active: Option<bool>,
        interval: impl Into<String>,
        semantic_versioning: Option<bool>,
        defaults: Option<SharedBase>,
        hard_defaults: Option<SharedBase>,
    ) -> Self {
        Self {
            interval: non_empty::from(interval.into()),
            semantic_versioning,
            active,
            defaults,
            hard_defaults,
        }
    }

    /// Attaches (or replaces) the fallback layers.
    pub fn apply_defaults(
        &mut self,
        defaults: Option<SharedBase>,
        hard_defaults: Option<SharedBase>,
    ) {
        self.defaults = defaults;
        self.hard_defaults = hard_defaults;
    }

    /// Returns whether the service is active. Unset counts as active.
    ///
    /// Only the root layer is consulted.
    #[must_use]
    pub fn get_active(&self) -> bool {
        self.active.unwrap_or(true)
    }

    /// Returns the effective interval, or an empty string if no layer sets one.
    ///
    /// An empty string in any layer counts as unset.
    #[must_use]
    pub fn get_interval(&self) -> String {
        self.resolve_interval().unwrap_or_default()
    }

    /// Returns a handle to the layer that provides the interval.
    ///
    /// `None` if no layer sets an interval.
    pub fn interval_slot(&mut self) -> Option<IntervalSlot<'_>> {
        if non_empty::get(&self.interval).is_some() {
            return Some(IntervalSlot::Root(&mut self.interval));
        }
        if let Some(layer) = self.defaults.as_ref().filter(|d| d.interval().is_some()) {
            return Some(IntervalSlot::Defaults(layer.clone()));
        }
        self.hard_defaults
            .as_ref()
            .filter(|hd| hd.interval().is_some())
            .map(|layer| IntervalSlot::HardDefaults(layer.clone()))
    }

    /// Returns the layer that provides the interval, if any.
    #[must_use]
    pub fn interval_source(&self) -> Option<Source> {
        if non_empty::get(&self.interval).is_some() {
            return Some(Source::Root);
        }
        let sets_interval = |layer: &SharedBase| layer.interval().is_some();
        if self.defaults.as_ref().is_some_and(sets_interval) {
            return Some(Source::Defaults);
        }
        self.hard_defaults
            .as_ref()
            .is_some_and(sets_interval)
            .then_some(Source::HardDefaults)
    }

    /// Parses the effective interval.
    ///
    /// Expects [`check_values`](Self::check_values) to have run first.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Unset`] if no layer sets an interval, or
    /// [`IntervalError::Malformed`] if the resolved value does not parse.
    pub fn get_interval_duration(&self) -> Result<Duration, IntervalError> {
        let interval = self.resolve_interval().ok_or(IntervalError::Unset)?;
        duration::parse_interval(&interval)
    }

    /// Returns whether semantic versioning is used. `true` if no layer sets it.
    #[must_use]
    pub fn get_semantic_versioning(&self) -> bool {
        self.resolve(self.semantic_versioning, |base| base.semantic_versioning)
            .unwrap_or(true)
    }

    fn resolve_interval(&self) -> Option<String> {
        let set = |value: &Option<String>| non_empty::get(value).map(str::to_owned);
        self.resolve(set(&self.interval), |base| set(&base.interval))
    }

    /// Walks root, defaults and hard defaults, returning the first value set.
    fn resolve<T>(
        &self,
        root: Option<T>,
        field: impl Fn(&OptionsBase) -> Option<T>,
    ) -> Option<T> {
        root.or_else(|| self.defaults.as_ref().and_then(|d| field(&*d.read())))
            .or_else(|| {
                self.hard_defaults
                    .as_ref()
                    .and_then(|hd| field(&*hd.read()))
            })
    }
}
