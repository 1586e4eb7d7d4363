// Same shims as the core crate, under the `virtual_grid_adapter` target.

#[cfg(feature = "tracing")]
macro_rules! adapter_log {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "virtual_grid_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! adapter_log {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! adapter_trace {
    ($($tt:tt)*) => {
        adapter_log!(trace, $($tt)*)
    };
}

macro_rules! adapter_debug {
    ($($tt:tt)*) => {
        adapter_log!(debug, $($tt)*)
    };
}

macro_rules! adapter_warn {
    ($($tt:tt)*) => {
        adapter_log!(warn, $($tt)*)
    };
}
