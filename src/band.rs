//! Validated spectral band indices.
//!
//! The coefficient tables are indexed by band, so an index is checked once
//! when an [`IrBand`] or [`SwBand`] is built and never again afterwards.

use crate::constants::{N_IR_BANDS, N_SW_BANDS};
use crate::error::BugsradError;

/// The two sets of spectral bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralRegion {
    /// Longwave bands, used for the Planck emission
    Infrared,
    /// Shortwave intervals, used for Rayleigh scattering
    Shortwave,
}

impl SpectralRegion {
    /// Number of bands in this region.
    pub const fn num_bands(self) -> usize {
        match self {
            SpectralRegion::Infrared => N_IR_BANDS,
            SpectralRegion::Shortwave => N_SW_BANDS,
        }
    }

    /// Check `band` against the number of bands and return it as an index.
    pub(crate) fn check(self, band: i64) -> Result<usize, BugsradError> {
        usize::try_from(band)
            .ok()
            .filter(|&index| index < self.num_bands())
            .ok_or(BugsradError::BandOutOfRange { region: self, band })
    }
}

impl std::fmt::Display for SpectralRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpectralRegion::Infrared => write!(f, "IR"),
            SpectralRegion::Shortwave => write!(f, "SW"),
        }
    }
}

/// One of the [`N_IR_BANDS`] infrared bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IrBand(usize);

/// One of the [`N_SW_BANDS`] shortwave intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwBand(usize);

impl IrBand {
    /// Validate an infrared band index.
    pub fn new(band: i64) -> Result<Self, BugsradError> {
        SpectralRegion::Infrared.check(band).map(Self)
    }

    /// Zero-based index into the band tables.
    pub fn index(self) -> usize {
        self.0
    }

    /// All infrared bands, in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_IR_BANDS).map(Self)
    }
}

impl SwBand {
    /// Validate a shortwave band index.
    pub fn new(band: i64) -> Result<Self, BugsradError> {
        SpectralRegion::Shortwave.check(band).map(Self)
    }

    /// Zero-based index into the band tables.
    pub fn index(self) -> usize {
        self.0
    }

    /// All shortwave bands, in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_SW_BANDS).map(Self)
    }
}

impl TryFrom<i64> for IrBand {
    type Error = BugsradError;

    fn try_from(band: i64) -> Result<Self, Self::Error> {
        Self::new(band)
    }
}

impl TryFrom<i64> for SwBand {
    type Error = BugsradError;

    fn try_from(band: i64) -> Result<Self, Self::Error> {
        Self::new(band)
    }
}
