/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The following macros are mostly intended to serve as pseudo-documentation within tests,
// in addition to convenience/clarity

/// Assert that a [`Result`] is [`Ok`]
///
/// If the provided expresion evaulates to [`Ok`], then the
/// macro returns the value contained within the [`Ok`]. If
/// the [`Result`] is an [`Err`] then the macro will [`panic`]
/// with a message that includes the expression and the error.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            std::result::Result::Ok(v) => v,
            std::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that a [`Result`] is [`Err`] and matches a desired error
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), e)
                }
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Assert that the result of a `try_` contract client call failed with the given contract error.
///
/// Invocation errors that don't decode into the contract's error type (host errors,
/// errors raised by a callee) fail the assertion.
#[macro_export]
macro_rules! assert_contract_err {
    ( $given:expr, $expected:expr ) => {
        match $given {
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error {:?}, got {:?} instead",
                    stringify!($expected),
                    v
                )
            }
            std::result::Result::Err(std::result::Result::Err(e)) => {
                panic!("Unexpected invocation error {:?}", e)
            }
            std::result::Result::Err(std::result::Result::Ok(e)) => {
                if e != $expected {
                    panic!("Expected error {:?}, got {:?} instead", $expected, e)
                }
            }
        }
    };
}
