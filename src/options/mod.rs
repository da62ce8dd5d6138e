//! Layered per-service options.
//!
//! Each monitored service carries an [`Options`] value. Unset fields fall
//! back to two shared layers of [`OptionsBase`]:
//!
//! 1. **Root** - the service's own options
//! 2. **Defaults** - service-level defaults, shared by many services
//! 3. **Hard defaults** - global last-resort values
//!
//! then to a built-in value where one exists. The first layer that sets a
//! value wins.
//!
//! # Asymmetric fallback
//!
//! `active` is resolved from the root layer only (unset means active). The
//! interval and semantic versioning walk all three layers.
//!
//! # Dumps
//!
//! The `Display` impl of [`Options`] is a YAML echo of the root layer: it
//! shows what the user set, not what is in effect.

mod base;
pub mod duration;
mod dump;
mod error;
mod non_empty;
mod root;
mod validate;

#[cfg(test)]
mod root_tests;

pub use base::{OptionsBase, SharedBase};
pub use dump::render;
pub use error::{IntervalError, ValidationError, ValidationErrors};
pub use root::{IntervalSlot, Options, Source};

use validate::check_interval;
