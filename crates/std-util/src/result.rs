/// Asserts that the expression is `Err` and yields the error.
///
/// The `is = predicate` form also checks the error with the named predicate
/// method, e.g. `assert_err!(res, is = is_invalid_state)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr, is = $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            "expected error matching `{}`; actual={}",
            stringify!($pred),
            err
        );
        err
    }};
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Asserts that the expression is `Ok` and yields the value.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual error={err}"),
        }
    };
}
