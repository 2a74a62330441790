//! Error types for widget construction.
//!
//! Every runtime operation on the widget is total. The only fallible step is
//! building a [`Layout`](crate::layout::Layout), which checks that the host
//! supplied every screen region the widget draws into.

use crate::layout::Region;

/// Errors reported while validating a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required region was never supplied.
    #[error("layout is missing the {region} region")]
    MissingRegion {
        /// The absent region.
        region: Region,
    },

    /// A region has zero width or height.
    #[error("the {region} region is empty")]
    EmptyRegion {
        /// The empty region.
        region: Region,
    },

    /// A nested region extends past the region that must contain it.
    #[error("the {region} region does not fit inside the {container} region")]
    RegionOutside {
        /// The nested region.
        region: Region,
        /// The region it must lie within.
        container: Region,
    },

    /// The screen cannot hold the default arrangement.
    #[error("a {width}x{height} screen is too small for the list filter")]
    ScreenTooSmall {
        /// Screen width in columns.
        width: u16,
        /// Screen height in rows.
        height: u16,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
