//! Output verbosity mode.

/// Output verbosity mode.
///
/// Warnings and headers are shown in every mode; the mode only decides
/// how much of the passing detail is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every observation plus loader details.
    Verbose,
    /// Show every probe observation.
    #[default]
    Normal,
    /// Show headers and problems only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows extra diagnostic detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows plain and success observations.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
