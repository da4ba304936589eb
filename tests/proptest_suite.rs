//! Property-based tests for kinded_errors
//!
//! These tests use proptest to generate random inputs and verify the factory
//! contract holds for all of them.

use kinded_errors::{Arg, ErrorFactory, GenerationError};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    User,
    System,
    Network,
}

fn any_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::User), Just(Kind::System), Just(Kind::Network)]
}

fn any_arg() -> impl Strategy<Value = Arg<'static>> {
    prop_oneof![
        any::<i64>().prop_map(Arg::Int),
        any::<u64>().prop_map(Arg::UInt),
        any::<bool>().prop_map(Arg::Bool),
        any::<char>().prop_map(Arg::Char),
        "\\PC{0,50}".prop_map(|s: String| Arg::from(s)),
    ]
}

type Seen = Arc<Mutex<Option<(Kind, String, String, Vec<Arg<'static>>)>>>;

/// Factory whose generator records its inputs and answers with `outcome`.
fn recording_factory(
    outcome: std::result::Result<String, String>,
    default_kind: Kind,
) -> (ErrorFactory<Kind>, Seen) {
    let seen: Seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let factory = ErrorFactory::new(
        move |kind: Kind, descriptor: &str, fallback: &str, args: &[Arg<'_>]| {
            *sink.lock().unwrap() = Some((
                kind,
                descriptor.to_owned(),
                fallback.to_owned(),
                args.iter().cloned().map(Arg::into_owned).collect(),
            ));
            outcome.clone().map_err(GenerationError::from)
        },
        default_kind,
    );
    (factory, seen)
}

// ============================================================================
// SUCCESS AND FAILURE PATHS
// ============================================================================

proptest! {
    /// A resolved message keeps the requested kind and the generator's text
    #[test]
    fn success_path_fidelity(
        kind in any_kind(),
        default_kind in any_kind(),
        descriptor in "\\PC{0,100}",
        fallback in "\\PC{0,100}",
        message in "\\PC{0,200}",
        args in prop::collection::vec(any_arg(), 0..8),
    ) {
        let (factory, _) = recording_factory(Ok(message.clone()), default_kind);
        let err = factory.error(kind, &descriptor, &fallback, &args);

        prop_assert_eq!(err.kind(), kind);
        prop_assert_eq!(err.message(), message.as_str());
    }

    /// A generator failure always lands on the default kind with the failure text
    #[test]
    fn failure_path_override(
        kind in any_kind(),
        default_kind in any_kind(),
        descriptor in "\\PC{0,100}",
        fallback in "\\PC{0,100}",
        failure in "\\PC{0,200}",
        args in prop::collection::vec(any_arg(), 0..8),
    ) {
        let (factory, _) = recording_factory(Err(failure.clone()), default_kind);
        let err = factory.error(kind, &descriptor, &fallback, &args);

        prop_assert_eq!(err.kind(), default_kind);
        prop_assert_eq!(err.message(), failure.as_str());
    }

    /// The generator observes exactly what the caller passed, in order
    #[test]
    fn arguments_pass_through(
        kind in any_kind(),
        descriptor in "\\PC{0,100}",
        fallback in "\\PC{0,100}",
        args in prop::collection::vec(any_arg(), 0..16),
    ) {
        let (factory, seen) = recording_factory(Ok(String::new()), Kind::System);
        let _ = factory.error(kind, &descriptor, &fallback, &args);

        let seen = seen.lock().unwrap().take().unwrap();
        prop_assert_eq!(seen.0, kind);
        prop_assert_eq!(seen.1, descriptor);
        prop_assert_eq!(seen.2, fallback);
        prop_assert_eq!(seen.3, args);
    }
}

// ============================================================================
// STATELESSNESS
// ============================================================================

proptest! {
    /// Arguments from one call never show up in the next
    #[test]
    fn no_retention_between_calls(
        first in prop::collection::vec(any_arg(), 1..8),
        second in prop::collection::vec(any_arg(), 0..8),
    ) {
        let (factory, seen) = recording_factory(Ok(String::from("m")), Kind::System);

        let _ = factory.error(Kind::User, "first", "", &first);
        let _ = factory.error(Kind::User, "second", "", &second);

        let seen = seen.lock().unwrap().take().unwrap();
        prop_assert_eq!(seen.1, "second");
        prop_assert_eq!(seen.3, second);
    }

    /// A deterministic generator yields equal values for equal inputs
    #[test]
    fn repeated_construction_is_idempotent(
        kind in any_kind(),
        descriptor in "\\PC{0,100}",
        repeats in 1usize..10,
    ) {
        let factory = ErrorFactory::new(
            |kind: Kind, descriptor: &str, _: &str, _: &[Arg<'_>]| match kind {
                Kind::Network => Err(GenerationError::new("network catalog missing")),
                _ => Ok(descriptor.chars().rev().collect()),
            },
            Kind::System,
        );

        let reference = factory.error(kind, &descriptor, "", &[]);
        for _ in 0..repeats {
            prop_assert_eq!(&factory.error(kind, &descriptor, "", &[]), &reference);
        }
    }
}

// ============================================================================
// LOG VIEW PROPERTIES
// ============================================================================

proptest! {
    /// Rendered log lines are valid UTF-8 and bounded
    #[test]
    fn log_rendering_is_bounded(message in "\\PC{0,5000}") {
        let factory = ErrorFactory::new(
            |_: Kind, descriptor: &str, _: &str, _: &[Arg<'_>]| {
                Ok::<_, GenerationError>(descriptor.to_owned())
            },
            Kind::System,
        );
        let err = factory.error(Kind::User, &message, "", &[]);

        let mut buffer = String::new();
        err.log().write_to(&mut buffer).unwrap();

        prop_assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
        prop_assert!(buffer.len() < 1100);
        // The value keeps the text verbatim
        prop_assert_eq!(err.message(), message.as_str());
    }

    /// Display renders exactly the message
    #[test]
    fn display_is_message(failure in "\\PC{0,300}") {
        let (factory, _) = recording_factory(Err(failure.clone()), Kind::System);
        let err = factory.error(Kind::User, "d", "f", &[]);
        prop_assert_eq!(err.to_string(), failure);
    }
}

// ============================================================================
// CONCURRENT PROPERTIES
// ============================================================================

proptest! {
    /// One factory can be shared across threads without mixing results
    #[test]
    fn concurrent_construction(
        thread_count in 1usize..8,
        errors_per_thread in 1usize..50,
    ) {
        let factory = ErrorFactory::new(
            |kind: Kind, descriptor: &str, _: &str, args: &[Arg<'_>]| match kind {
                Kind::User => Ok(format!("{}:{}", descriptor, args[0])),
                _ => Err(GenerationError::new("unsupported")),
            },
            Kind::System,
        );

        std::thread::scope(|scope| {
            for t in 0..thread_count {
                let factory = &factory;
                scope.spawn(move || {
                    for i in 0..errors_per_thread {
                        let descriptor = format!("thread_{}", t);
                        let ok = factory.error(Kind::User, &descriptor, "", &[Arg::from(i)]);
                        assert_eq!(ok.kind(), Kind::User);
                        assert_eq!(ok.message(), format!("thread_{}:{}", t, i));

                        let failed = factory.error(Kind::Network, &descriptor, "", &[]);
                        assert_eq!(failed.kind(), Kind::System);
                        assert_eq!(failed.message(), "unsupported");
                    }
                });
            }
        });
    }
}
