#![no_main]

use kinded_errors::{Arg, Args, ErrorFactory, GenerationError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    User,
    System,
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let text: &str = &text;
    let (descriptor, fallback) = text.split_once('|').unwrap_or((text, ""));

    let factory = ErrorFactory::new(
        |kind: Kind, descriptor: &str, fallback: &str, args: &[Arg<'_>]| {
            if descriptor.len() % 2 == 0 {
                Ok(format!("{:?}:{}:{}:{}", kind, descriptor, fallback, args.len()))
            } else {
                Err(GenerationError::new(fallback.to_owned()))
            }
        },
        Kind::System,
    );

    let kind = if selector & 1 == 0 { Kind::User } else { Kind::System };
    let args: Args<'_> = rest.iter().take(8).map(|&b| Arg::from(b)).collect();
    let err = factory.error(kind, descriptor, fallback, &args);

    if descriptor.len() % 2 == 0 {
        assert_eq!(err.kind(), kind);
    } else {
        assert_eq!(err.kind(), Kind::System);
        assert_eq!(err.message(), fallback);
    }

    let mut line = String::new();
    let _ = err.log().write_to(&mut line);
});
