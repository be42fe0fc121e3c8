/// Builds a [`Record`](crate::stmt::Record) from `name => value` pairs.
#[macro_export]
macro_rules! record {
    () => {
        $crate::stmt::Record::new()
    };
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::stmt::Record::new();
        $(
            record.insert($name, $value);
        )+
        record
    }};
}
