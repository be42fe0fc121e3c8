#[macro_export]
macro_rules! assert_none {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            None => {}
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `None`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; actual=None"),
        }
    };
}
