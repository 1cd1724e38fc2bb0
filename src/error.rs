use crate::band::SpectralRegion;

/// Possible errors from the band calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BugsradError {
    /// The band index was not given as an integer
    BandNotInteger {
        /// Which set of bands the index was meant for
        region: SpectralRegion,
    },
    /// The band index is outside of `0..region.num_bands()`
    BandOutOfRange {
        /// Which set of bands the index was meant for
        region: SpectralRegion,
        /// The offending index
        band: i64,
    },
    /// The inputs don't have the expected shape(s). The payload names the
    /// input that failed the check.
    InconsistentInputs(&'static str),
}

impl std::fmt::Display for BugsradError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BugsradError::BandNotInteger { region } => {
                write!(f, "input {region} band must be an integer")
            }
            BugsradError::BandOutOfRange { region, band } => {
                let num_bands = region.num_bands();
                write!(
                    f,
                    "{region} band {band} is out of range, must be between 0 and {} ({num_bands} bands)",
                    num_bands - 1
                )
            }
            BugsradError::InconsistentInputs(name) => {
                write!(f, "input `{name}` has the wrong shape")
            }
        }
    }
}

impl std::error::Error for BugsradError {}
