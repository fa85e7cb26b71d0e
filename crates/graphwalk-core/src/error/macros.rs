//! Error macros for graphwalk

/// Macro for returning an unknown vertex error
#[macro_export]
macro_rules! bail_unknown_vertex {
    ($key:expr, $referenced_by:expr) => {
        return Err($crate::error::GraphError::unknown_vertex(
            $key,
            $referenced_by,
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
