//! Display trait plumbing for snapshot rendering.

use core::fmt::{self, Display, Formatter};

use crate::printer::Snapshotter;
use crate::value::Snap;

/// Display wrapper for any type that implements [`Snap`].
pub struct SnapDisplay<'a, T: Snap> {
    pub(crate) value: &'a T,
    pub(crate) printer: Snapshotter,
}

impl<T: Snap> Display for SnapDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.printer.format_to(self.value, f)
    }
}

/// Extension trait for [`Snap`] types to drop snapshots into `format!` and
/// friends.
pub trait SnapExt: Snap {
    /// Get a displayable wrapper that renders this value with default
    /// settings
    fn snap(&self) -> SnapDisplay<'_, Self>
    where
        Self: Sized;

    /// Get a displayable wrapper with custom printer settings
    fn snap_with(&self, printer: Snapshotter) -> SnapDisplay<'_, Self>
    where
        Self: Sized;
}

impl<T: Snap> SnapExt for T {
    fn snap(&self) -> SnapDisplay<'_, Self> {
        SnapDisplay {
            value: self,
            printer: Snapshotter::new(),
        }
    }

    fn snap_with(&self, printer: Snapshotter) -> SnapDisplay<'_, Self> {
        SnapDisplay {
            value: self,
            printer,
        }
    }
}
