use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Value out of range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_settings() -> Result<String, std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn question_mark_converts_source_errors() {
    fn inner() -> Result<String, DemoError> {
        Ok(read_settings()?)
    }

    let err = inner().expect_err("io error should convert");
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: missing");
}

#[test]
fn context_attaches_to_source_results() {
    let err = read_settings().context("Loading settings").expect_err("io error expected");

    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert_eq!(err.to_string(), "IO error (Loading settings): missing");
}

#[test]
fn context_attaches_to_converted_results() {
    fn out_of_range() -> Result<(), DemoError> {
        Err(DemoError::OutOfRange { message: "42 exceeds the limit".into(), context: None })
    }

    let err = out_of_range().context("Checking bounds").expect_err("error expected");
    assert_eq!(err.to_string(), "Value out of range (Checking bounds): 42 exceeds the limit");
}

#[test]
fn display_without_context_omits_parenthetical() {
    let err = DemoError::OutOfRange { message: "42 exceeds the limit".into(), context: None };
    assert_eq!(err.to_string(), "Value out of range: 42 exceeds the limit");
}

#[test]
fn internal_converts_from_borrowed_and_owned_strings() {
    let borrowed: DemoError = "borrowed failure".into();
    assert!(matches!(borrowed, DemoError::Internal { context: None, .. }));

    let owned: DemoError = String::from("owned failure").into();
    assert_eq!(owned.to_string(), "Internal error: owned failure");
}

#[test]
fn source_chain_is_preserved() {
    use std::error::Error;

    let err: DemoError = read_settings().expect_err("io error").into();
    let source = err.source().expect("source should be preserved");
    assert_eq!(source.to_string(), "missing");
}
