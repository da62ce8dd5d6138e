//! Tests for layered resolution.

use std::time::Duration;

use super::{IntervalError, IntervalSlot, Options, OptionsBase, SharedBase, Source};

/// Options with empty defaults and hard defaults attached.
fn test_options() -> Options {
    Options::new(
        None,
        "",
        None,
        Some(OptionsBase::default().shared()),
        Some(OptionsBase::default().shared()),
    )
}

fn layers(options: &Options) -> (&SharedBase, &SharedBase) {
    (
        options.defaults.as_ref().unwrap(),
        options.hard_defaults.as_ref().unwrap(),
    )
}

fn set_intervals(options: &mut Options, root: &str, defaults: &str, hard_defaults: &str) {
    options.interval = (!root.is_empty()).then(|| root.to_string());
    let (d, hd) = layers(options);
    d.write().interval = (!defaults.is_empty()).then(|| defaults.to_string());
    hd.write().interval = (!hard_defaults.is_empty()).then(|| hard_defaults.to_string());
}

mod active {
    use super::*;

    #[test]
    fn unset_is_active() {
        let options = test_options();
        assert!(options.get_active());
    }

    #[test]
    fn explicit_true() {
        let mut options = test_options();
        options.active = Some(true);
        assert!(options.get_active());
    }

    #[test]
    fn explicit_false() {
        let mut options = test_options();
        options.active = Some(false);
        assert!(!options.get_active());
    }

    #[test]
    fn ignores_attached_layers() {
        // Layers have no active field, so nothing below root can turn it off
        let options = Options::new(
            None,
            "",
            Some(false),
            Some(OptionsBase::new("1h", Some(false)).shared()),
            Some(OptionsBase::new("2h", Some(false)).shared()),
        );
        assert!(options.get_active());
    }
}

mod interval {
    use super::*;

    #[test]
    fn root_overrides_all() {
        let mut options = test_options();
        set_intervals(&mut options, "10s", "1m10s", "1m10s");

        assert_eq!(options.get_interval(), "10s");
        assert_eq!(options.interval_source(), Some(Source::Root));
    }

    #[test]
    fn default_overrides_hard_default() {
        let mut options = test_options();
        set_intervals(&mut options, "", "10s", "1m10s");

        assert_eq!(options.get_interval(), "10s");
        assert_eq!(options.interval_source(), Some(Source::Defaults));
    }

    #[test]
    fn hard_default_is_last_resort() {
        let mut options = test_options();
        set_intervals(&mut options, "", "", "10s");

        assert_eq!(options.get_interval(), "10s");
        assert_eq!(options.interval_source(), Some(Source::HardDefaults));
    }

    #[test]
    fn empty_when_nothing_set() {
        let options = test_options();

        assert_eq!(options.get_interval(), "");
        assert_eq!(options.interval_source(), None);
    }

    #[test]
    fn missing_layers_are_absent_values() {
        let options = Options::default();

        assert_eq!(options.get_interval(), "");
        assert!(options.get_semantic_versioning());
        assert!(options.get_active());
    }

    #[test]
    fn constructor_treats_empty_as_unset() {
        let options = Options::new(None, "", None, None, None);
        assert!(options.interval.is_none());
    }

    #[test]
    fn repeated_reads_are_identical() {
        let mut options = test_options();
        set_intervals(&mut options, "", "20s", "30s");

        assert_eq!(options.get_interval(), options.get_interval());
        assert_eq!(
            options.get_semantic_versioning(),
            options.get_semantic_versioning()
        );
    }

    #[test]
    fn empty_root_falls_through() {
        let mut options = test_options();
        set_intervals(&mut options, "", "20s", "30s");
        options.interval = Some(String::new());

        assert_eq!(options.get_interval(), "20s");
        assert_eq!(options.interval_source(), Some(Source::Defaults));
        assert_eq!(
            options.get_interval_duration().unwrap(),
            Duration::from_secs(20)
        );
    }

    #[test]
    fn empty_shared_layer_falls_through() {
        let mut options = test_options();
        set_intervals(&mut options, "", "", "30s");
        layers(&options).0.write().interval = Some(String::new());

        assert_eq!(options.get_interval(), "30s");
        assert_eq!(options.interval_source(), Some(Source::HardDefaults));
    }

    #[test]
    fn empty_everywhere_is_unset() {
        let mut options = test_options();
        options.interval = Some(String::new());
        layers(&options).1.write().interval = Some(String::new());

        assert_eq!(options.get_interval(), "");
        assert!(matches!(
            options.get_interval_duration(),
            Err(IntervalError::Unset)
        ));
    }
}

mod interval_slot {
    use super::*;

    #[test]
    fn root_overrides_all() {
        let mut options = test_options();
        set_intervals(&mut options, "10s", "20s", "30s");

        let slot = options.interval_slot().unwrap();
        assert_eq!(slot.source(), Source::Root);
        assert_eq!(slot.get(), "10s");
    }

    #[test]
    fn default_overrides_hard_default() {
        let mut options = test_options();
        set_intervals(&mut options, "", "20s", "30s");

        let slot = options.interval_slot().unwrap();
        assert_eq!(slot.source(), Source::Defaults);
        assert_eq!(slot.get(), "20s");
    }

    #[test]
    fn hard_default_is_last_resort() {
        let mut options = test_options();
        set_intervals(&mut options, "", "", "30s");

        let slot = options.interval_slot().unwrap();
        assert_eq!(slot.source(), Source::HardDefaults);
        assert_eq!(slot.get(), "30s");
    }

    #[test]
    fn none_when_nothing_set() {
        let mut options = test_options();
        assert!(options.interval_slot().is_none());
    }

    #[test]
    fn write_through_root_changes_options() {
        let mut options = test_options();
        set_intervals(&mut options, "10s", "20s", "30s");

        if let Some(mut slot) = options.interval_slot() {
            slot.set("15s");
        }

        assert_eq!(options.interval.as_deref(), Some("15s"));
        assert_eq!(layers(&options).0.interval().as_deref(), Some("20s"));
    }

    #[test]
    fn write_through_defaults_changes_shared_layer() {
        let defaults = OptionsBase::new("20s", None).shared();
        let mut first = Options::new(None, "", None, Some(defaults.clone()), None);
        let second = Options::new(None, "", None, Some(defaults.clone()), None);

        let mut slot = first.interval_slot().unwrap();
        assert!(matches!(slot, IntervalSlot::Defaults(_)));
        slot.set("45s");

        assert_eq!(defaults.interval().as_deref(), Some("45s"));
        assert_eq!(second.get_interval(), "45s");
        assert!(first.interval.is_none());
    }

    #[test]
    fn empty_write_unsets_the_layer() {
        let mut options = Options::new(None, "10s", None, None, None);

        options.interval_slot().unwrap().set("");

        assert!(options.interval.is_none());
        assert!(options.interval_slot().is_none());
    }

    #[test]
    fn empty_root_is_skipped() {
        let mut options = test_options();
        set_intervals(&mut options, "", "20s", "");
        options.interval = Some(String::new());

        let slot = options.interval_slot().unwrap();
        assert_eq!(slot.source(), Source::Defaults);
        assert_eq!(slot.get(), "20s");
    }
}

mod interval_duration {
    use super::*;

    #[test]
    fn parses_compound_duration() {
        let mut options = test_options();
        options.interval = Some("3h2m1s".to_string());

        let want = Duration::from_secs(3 * 3600)
            + Duration::from_secs(2 * 60)
            + Duration::from_secs(1);
        assert_eq!(options.get_interval_duration().unwrap(), want);
    }

    #[test]
    fn uses_resolved_layer() {
        let mut options = test_options();
        set_intervals(&mut options, "", "", "10m");

        assert_eq!(
            options.get_interval_duration().unwrap(),
            Duration::from_secs(600)
        );
    }

    #[test]
    fn unset_interval_is_an_error() {
        let options = test_options();

        assert!(matches!(
            options.get_interval_duration(),
            Err(IntervalError::Unset)
        ));
    }

    #[test]
    fn unvalidated_value_propagates_parse_failure() {
        let options = Options::new(None, "10x", None, None, None);

        assert!(matches!(
            options.get_interval_duration(),
            Err(IntervalError::Malformed { .. })
        ));
    }
}

mod semantic_versioning {
    use super::*;

    fn with_layers(
        root: Option<bool>,
        defaults: Option<bool>,
        hard_defaults: Option<bool>,
    ) -> Options {
        let mut options = test_options();
        options.semantic_versioning = root;
        let (d, hd) = layers(&options);
        d.write().semantic_versioning = defaults;
        hd.write().semantic_versioning = hard_defaults;
        options
    }

    #[test]
    fn root_overrides_all() {
        let options = with_layers(Some(true), Some(false), Some(false));
        assert!(options.get_semantic_versioning());
    }

    #[test]
    fn root_false_overrides_true_layers() {
        let options = with_layers(Some(false), Some(true), Some(true));
        assert!(!options.get_semantic_versioning());
    }

    #[test]
    fn default_overrides_hard_default() {
        let options = with_layers(None, Some(true), Some(false));
        assert!(options.get_semantic_versioning());

        let options = with_layers(None, Some(false), Some(true));
        assert!(!options.get_semantic_versioning());
    }

    #[test]
    fn hard_default_is_last_resort() {
        let options = with_layers(None, None, Some(true));
        assert!(options.get_semantic_versioning());

        let options = with_layers(None, None, Some(false));
        assert!(!options.get_semantic_versioning());
    }

    #[test]
    fn defaults_to_true_when_unset() {
        let options = with_layers(None, None, None);
        assert!(options.get_semantic_versioning());
    }
}

mod shared_layers {
    use super::*;

    #[test]
    fn later_mutation_is_visible_to_every_options() {
        let defaults = OptionsBase::new("10s", Some(true)).shared();
        let a = Options::new(None, "", None, Some(defaults.clone()), None);
        let b = Options::new(None, "", None, Some(defaults.clone()), None);

        defaults.replace(OptionsBase::new("1m", Some(false)));

        for options in [&a, &b] {
            assert_eq!(options.get_interval(), "1m");
            assert!(!options.get_semantic_versioning());
        }
    }

    #[test]
    fn cloned_options_share_layers() {
        let options = Options::new(
            None,
            "",
            None,
            Some(OptionsBase::default().shared()),
            None,
        );
        let copy = options.clone();

        assert!(options
            .defaults
            .as_ref()
            .unwrap()
            .ptr_eq(copy.defaults.as_ref().unwrap()));
    }

    #[test]
    fn apply_defaults_attaches_layers() {
        let mut options = Options::default();
        options.apply_defaults(
            Some(OptionsBase::new("20s", None).shared()),
            Some(OptionsBase::new("30s", Some(false)).shared()),
        );

        assert_eq!(options.get_interval(), "20s");
        assert!(!options.get_semantic_versioning());
    }
}
