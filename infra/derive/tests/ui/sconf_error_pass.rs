use sconf_derive::sconf_error;
use std::borrow::Cow;

#[sconf_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected{}: {reason}", format_context(.context))]
    Rejected { reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), DemoError> {
    let res: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    res.context("Opening settings")
}

fn main() {
    let err = open().unwrap_err();
    assert_eq!(err.kind(), "IoError");
    assert_eq!(err.to_string(), "IO error (Opening settings): disk");

    let rejected: Result<(), DemoError> =
        Err(DemoError::Rejected { reason: "reserved key".into(), context: None });
    let err = rejected.context("Scanning payload").unwrap_err();
    assert_eq!(err.kind(), "RejectedError");
    assert_eq!(err.to_string(), "Rejected (Scanning payload): reserved key");

    let internal = DemoError::from("boom");
    assert_eq!(internal.kind(), "InternalError");
}
