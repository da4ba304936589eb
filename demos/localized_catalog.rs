//! Reads a number from stdin and reports range errors through a factory whose
//! generator looks messages up in per-locale JSON catalogs.
//!
//! User errors are rendered in Russian on stdout, system errors in English on
//! stderr.

use kinded_errors::{Arg, ErrorFactory, GenerationError, MessageGenerator, generator, typed_err};
use serde_json::Value;
use std::collections::HashMap;
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorType {
    UserError,
    SystemError,
}

const EN_CATALOG: &str = r#"{
    "out_of_range": "Number {} is out of range [{}, {}]",
    "cannot_read": "Cannot read a number"
}"#;

const RU_CATALOG: &str = r#"{
    "out_of_range": "Число {} вне диапазона [{}, {}]",
    "cannot_read": "Не удалось прочитать число"
}"#;

/// One locale's messages, keyed by descriptor.
struct Localizer {
    messages: HashMap<String, String>,
}

impl Localizer {
    fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let messages = match serde_json::from_str::<Value>(source)? {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(text) => Some((key, text)),
                    _ => None,
                })
                .collect(),
            _ => HashMap::new(),
        };
        Ok(Self { messages })
    }

    fn localize(
        &self,
        descriptor: &str,
        fallback: &str,
        args: &[Arg<'_>],
    ) -> Result<String, GenerationError> {
        let template = self
            .messages
            .get(descriptor)
            .map(String::as_str)
            .unwrap_or(fallback);
        let mut out = String::with_capacity(template.len());
        let mut pieces = template.split("{}");
        let mut args = args.iter();
        if let Some(first) = pieces.next() {
            out.push_str(first);
        }
        for piece in pieces {
            let arg = args.next().ok_or_else(|| {
                GenerationError::new("message expects more arguments than were given")
            })?;
            out.push_str(&arg.to_string());
            out.push_str(piece);
        }
        Ok(out)
    }
}

fn message_generator(user: Localizer, system: Localizer) -> MessageGenerator<ErrorType> {
    generator::shared(move |kind: ErrorType, descriptor: &str, fallback: &str, args: &[Arg<'_>]| {
        let localizer = match kind {
            ErrorType::UserError => &user,
            ErrorType::SystemError => &system,
        };
        localizer
            .localize(descriptor, fallback, args)
            .map_err(|e| GenerationError::wrap("Unexpected error from localize", e))
    })
}

fn read_int_in_range(
    factory: &ErrorFactory<ErrorType>,
    input: &mut impl BufRead,
    min: i64,
    max: i64,
) -> kinded_errors::Result<i64, ErrorType> {
    let mut line = String::new();
    let num = match input.read_line(&mut line) {
        Ok(_) => line.trim().parse::<i64>().ok(),
        Err(_) => None,
    };
    let Some(num) = num else {
        return Err(typed_err!(factory, ErrorType::SystemError, "cannot_read", "Cannot read a message"));
    };
    if num < min || num > max {
        return Err(typed_err!(
            factory,
            ErrorType::UserError,
            "out_of_range",
            "Number is out of range",
            num,
            min,
            max
        ));
    }
    Ok(num)
}

fn main() -> Result<(), serde_json::Error> {
    let user = Localizer::from_json(RU_CATALOG)?;
    let system = Localizer::from_json(EN_CATALOG)?;
    let factory = ErrorFactory::from_shared(message_generator(user, system), ErrorType::SystemError);

    println!("Type a number between 1 and 5:");
    let stdin = io::stdin();
    match read_int_in_range(&factory, &mut stdin.lock(), 1, 5) {
        Ok(num) => println!("You typed {}", num),
        Err(err) => match err.kind() {
            ErrorType::UserError => println!("{}", err),
            ErrorType::SystemError => eprintln!("{}", err),
        },
    }
    Ok(())
}
