// Backend dispatch lives in hidden per-backend macros so the feature checks
// are resolved against this crate's features. A `#[cfg]` written directly in
// an exported macro's expansion would be evaluated in the calling crate
// instead.

#[cfg(feature = "defmt")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_msg_defmt {
    ($($arg:tt)*) => {
        $crate::_defmt::info!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_msg_defmt {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_msg_log {
    ($($arg:tt)*) => {
        $crate::_log::info!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log_msg_log {
    ($($arg:tt)*) => {};
}

/// Emits a message through every enabled logging backend.
///
/// Takes a format string and arguments, which are forwarded unchanged to the
/// backend macros (`defmt::info!` and/or `log::info!`). Each enabled backend
/// receives the message exactly once per invocation. With no backend feature
/// enabled, this compiles to nothing.
#[collapse_debuginfo(yes)]
#[macro_export]
macro_rules! log_msg {
    ($($arg:tt)*) => {{
        $crate::__log_msg_defmt!($($arg)*);
        $crate::__log_msg_log!($($arg)*);
    }};
}

/// Debug variant of [`log_msg!`], controlled by the `debug` feature.
///
/// With `debug` enabled this forwards to [`log_msg!`] unchanged. Without it
/// the invocation is compiled out entirely: no code is generated and the
/// arguments are never evaluated.
#[cfg(feature = "debug")]
#[collapse_debuginfo(yes)]
#[macro_export]
macro_rules! dbg_msg {
    ($($arg:tt)*) => {
        $crate::log_msg!($($arg)*)
    };
}

/// Debug variant of [`log_msg!`], controlled by the `debug` feature.
///
/// This is the disabled version: the invocation is compiled out entirely, no
/// code is generated and the arguments are never evaluated.
#[cfg(not(feature = "debug"))]
#[collapse_debuginfo(yes)]
#[macro_export]
macro_rules! dbg_msg {
    ($($arg:tt)*) => {};
}
