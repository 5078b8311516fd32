use crate::error::{BatchError, Result};
use log::warn;

/// What to do when a single input fails
///
/// Consulted at every per-input error site: path inspection, directory
/// traversal, decoding, series lookup and extraction. Output errors never
/// go through the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum ErrorPolicy {
    /// Log the error and move on to the next input
    #[default]
    Continue,

    /// Abort the run with the error
    StopOnError,
}

impl ErrorPolicy {
    /// Builds the policy matching a stop-on-error flag
    pub fn from_stop_flag(stop_on_error: bool) -> Self {
        if stop_on_error {
            ErrorPolicy::StopOnError
        } else {
            ErrorPolicy::Continue
        }
    }

    /// Applies the policy to an error
    ///
    /// Returns `Ok(())` when the run may continue.
    pub fn handle(&self, err: BatchError) -> Result<()> {
        match self {
            ErrorPolicy::Continue => {
                warn!("{}", err);
                Ok(())
            }
            ErrorPolicy::StopOnError => Err(err),
        }
    }
}
