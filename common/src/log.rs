//! Status macros used across the workspace.
//!
//! These forward to `tracing`; the CLI formatter decides how each one looks.
//! `success!` is an INFO event on the [`SUCCESS_TARGET`] target so it can be
//! told apart from plain `info!`.

pub const SUCCESS_TARGET: &str = "hostmap::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_resolve_through_this_crate() {
        crate::success!("{} hosts registered", 3);
        crate::warn!("Skipping facts: {}", "broken");
        assert_eq!(super::SUCCESS_TARGET, "hostmap::success");
    }
}
