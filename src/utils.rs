/// Forwards to the `log` crate when the `log` feature is enabled and compiles to nothing otherwise.
macro_rules! search_log {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::$level!($($arg)+);
    };
}
