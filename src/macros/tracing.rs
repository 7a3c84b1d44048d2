// Macros to instrument spans.

#[doc(hidden)]
#[macro_export]
macro_rules! __lexsort_span_internal {
    ($level:ident; $($element:tt)*) => {
        #[cfg(feature = "tracing")]
        let span = $crate::tracing::span!($crate::tracing::Level::$level, $($element)*);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __lexsort_span_trace {
    ($($element:tt)*) => {
        $crate::__lexsort_span_internal!(TRACE; $($element)*);
    };
}

// Macros to instrument events.

#[doc(hidden)]
#[macro_export]
macro_rules! __lexsort_trace_internal {
    ($level:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$level!($($element)*);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __lexsort_trace {
    ($($element:tt)*) => {{
        $crate::__lexsort_trace_internal!(trace; $($element)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __lexsort_trace_debug {
    ($($element:tt)*) => {{
        $crate::__lexsort_trace_internal!(debug; $($element)*)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __lexsort_trace_warn {
    ($($element:tt)*) => {{
        $crate::__lexsort_trace_internal!(warn; $($element)*)
    }};
}
