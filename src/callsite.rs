//! Call-site capture and frame resolution.
//!
//! # Responsibilities
//! - Capture file, enclosing function, and line at the logging call boundary
//! - Resolve the attributed frame from an explicit frame chain
//!
//! # Design Decisions
//! - Capture happens at compile time via `callsite!`; there is no runtime
//!   stack walking
//! - Wrapper helpers prepend their own frame and bump the depth, so the
//!   depth contract matches stack-walking loggers in other ecosystems
//! - A depth outside the chain is an error, never a placeholder record

use crate::error::LogError;

/// Source location of a logging call, captured where the call appears.
///
/// `function` holds the fully-qualified path of the enclosing function as
/// produced by [`callsite!`](crate::callsite!); use
/// [`function_name`](CallSite::function_name) and
/// [`file_name`](CallSite::file_name) for the bare forms that end up in
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Base filename of the call-site, directory prefix stripped.
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// Bare name of the enclosing function, module path and closure
    /// markers stripped.
    pub fn function_name(&self) -> &'static str {
        let name = self
            .function
            .strip_suffix("::__site")
            .unwrap_or(self.function);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }

    /// Line number of the call-site.
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Capture the current call-site: file, enclosing function, and line.
///
/// Expands to a [`CallSite`] describing the expansion point. The enclosing
/// function is recovered from the type name of a local item, so the stored
/// path carries a `::__site` suffix that `function_name` strips.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __site() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(file!(), type_name_of(__site), line!())
    }};
}

/// Select the attributed frame from a chain of captured call-sites.
///
/// `frames` is ordered nearest-first: index 0 is the frame that invoked the
/// logging call. `call_depth` counts frames outward, 1-based, so depth 1
/// attributes to the direct caller. Fails if the depth is zero or exceeds
/// the chain.
pub fn resolve_frame(frames: &[CallSite], call_depth: usize) -> Result<&CallSite, LogError> {
    call_depth
        .checked_sub(1)
        .and_then(|index| frames.get(index))
        .ok_or(LogError::FrameResolution {
            requested: call_depth,
            available: frames.len(),
        })
}
