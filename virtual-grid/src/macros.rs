// Logging shims. With `feature = "tracing"` these forward to `tracing` under the `virtual_grid`
// target; without it they expand to nothing and their arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! grid_log {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "virtual_grid", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! grid_log {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! grid_trace {
    ($($tt:tt)*) => {
        grid_log!(trace, $($tt)*)
    };
}

macro_rules! grid_debug {
    ($($tt:tt)*) => {
        grid_log!(debug, $($tt)*)
    };
}
