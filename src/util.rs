//! Console logging routed to the browser in wasm builds and compiled out in
//! native/test builds. Invoked as `crate::util::clog!("...")`.

#[cfg(target_family = "wasm")]
macro_rules! clog {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! clog {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

#[cfg(target_family = "wasm")]
macro_rules! cwarn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! cwarn {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

#[cfg(target_family = "wasm")]
macro_rules! cerr {
    ($($arg:tt)*) => {
        web_sys::console::error_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_family = "wasm"))]
macro_rules! cerr {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

pub(crate) use {cerr, clog, cwarn};
