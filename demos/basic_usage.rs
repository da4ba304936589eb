use kinded_errors::{Arg, ErrorFactory, GenerationError, typed_err};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorType {
    UserError,
    SystemError,
}

fn generate(
    kind: ErrorType,
    descriptor: &str,
    fallback: &str,
    args: &[Arg<'_>],
) -> Result<String, GenerationError> {
    match (kind, descriptor) {
        (ErrorType::UserError, "bad_port") => Ok(format!("Port {} is not allowed", args[0])),
        (ErrorType::SystemError, _) => Ok(fallback.to_owned()),
        _ => Err(GenerationError::new("No user message for this descriptor")),
    }
}

fn main() {
    let factory = ErrorFactory::new(generate, ErrorType::SystemError);

    println!("--- Basic Usage Example ---\n");

    // 1. Generator resolves the message: the requested kind is kept
    let err = typed_err!(factory, ErrorType::UserError, "bad_port", "", 22);
    println!("1. kind={:?} message=\"{}\"", err.kind(), err);

    // 2. Generator fails: the factory default kind takes over
    let err = typed_err!(factory, ErrorType::UserError, "bad_host", "Host rejected");
    println!("2. kind={:?} message=\"{}\"", err.kind(), err);

    // 3. Internal log line for operators
    err.with_log(|log| {
        let mut line = String::new();
        if log.write_to(&mut line).is_ok() {
            println!("3. log: {}", line);
        }
    });
}
