use core::fmt;

/// A non-fatal measurement anomaly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// The viewport measured zero wide and/or zero tall. Nothing can be shown until it grows.
    ZeroSizedViewport { width: f64, height: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSizedViewport { width, height } => write!(
                f,
                "invalid dimensions: viewport width and/or height is 0 (width={width}, height={height})"
            ),
        }
    }
}

/// Remembers whether a diagnostic already fired for one controller lifetime.
///
/// Zero-sized ticks tend to repeat (a container that is not attached yet keeps reporting 0),
/// so only the first one is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticLatch {
    fired: bool,
}

impl DiagnosticLatch {
    /// Returns `true` the first time it is called, `false` afterwards.
    pub fn fire(&mut self) -> bool {
        !core::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub(crate) fn reset(&mut self) {
        self.fired = false;
    }
}
