/// Combinable display flags for [`transcode`](crate::transcode).
///
/// The flags are orthogonal, not mutually exclusive. `hex` takes precedence
/// over caret-notation for any byte that is otherwise escapable. `tabs`,
/// `end_of_line` and `hex` each imply `nonprinting`; the builder methods
/// maintain that implication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayModes {
    /// Render control bytes in caret-notation and high-bit bytes with the
    /// `M-` meta marker.
    pub nonprinting: bool,
    /// Render tabs visibly instead of passing them through.
    pub tabs: bool,
    /// Emit `$` immediately before every line-feed byte.
    pub end_of_line: bool,
    /// Render escapable bytes as `<xx>` instead of caret/meta notation.
    pub hex: bool,
}

impl DisplayModes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_nonprinting(mut self) -> Self {
        self.nonprinting = true;
        self
    }

    pub fn with_tabs(mut self) -> Self {
        self.tabs = true;
        self.nonprinting = true;
        self
    }

    pub fn with_end_of_line(mut self) -> Self {
        self.end_of_line = true;
        self.nonprinting = true;
        self
    }

    pub fn with_hex(mut self) -> Self {
        self.hex = true;
        self.nonprinting = true;
        self
    }

    /// True when transcoding with these modes is the identity function.
    pub fn is_plain(&self) -> bool {
        !(self.nonprinting || self.tabs || self.end_of_line || self.hex)
    }
}
