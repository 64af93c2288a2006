//! Assertion utilities for testing

/// Assert that a result is OK and unwrap it
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?}", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}

/// Assert that a result is Err and unwrap the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?}", val),
            Err(err) => err,
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?} ({})", val, format!($($arg)+)),
            Err(err) => err,
        }
    };
}

/// Assert that a result failed with a post validation error, and that the error's
/// `Display` text is the error's literal message.
#[macro_export]
macro_rules! assert_post_error {
    ($expr:expr, $kind:expr) => {{
        let err = $crate::assert_err!($expr);
        let kind: $crate::__quill_types::error::PostError = $kind;
        assert_eq!(
            err.to_string(),
            kind.msg(),
            "unexpected error message for {:?}",
            kind
        );
        err
    }};
}

#[cfg(test)]
mod tests {
    use quill_types::error::{PostError, TransactionError};

    #[test]
    fn assert_post_error_matches_literal_message() {
        let result: Result<(), TransactionError> = Err(PostError::TopicTooLong.into());
        let err = assert_post_error!(result, PostError::TopicTooLong);
        assert_eq!(err, TransactionError::Post(PostError::TopicTooLong));
    }

    #[test]
    #[should_panic(expected = "Expected Err")]
    fn assert_err_panics_on_ok() {
        let result: Result<u8, ()> = Ok(1);
        let _ = assert_err!(result);
    }
}
