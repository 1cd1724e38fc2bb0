//! Physical and mathematical constants shared by the band calculations.
//!
//! Everything here is a compile-time constant, so the tables are built once
//! and are read-only for the life of the process.

/// Number of infrared bands.
pub const N_IR_BANDS: usize = 12;
/// Number of shortwave bands.
pub const N_SW_BANDS: usize = 6;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.80665;
/// Specific heat of dry air at constant pressure (J/kg/K)
pub const CP_DRY_AIR: f64 = 1.004e3;
/// Specific gas constant for dry air (J/K/kg)
pub const R_DRY: f64 = 287.0;
/// Universal gas constant (J/K/kmol)
pub const R_STAR: f64 = 8.3143e3;
/// Solar constant (W/m²)
pub const SOLAR_CONSTANT: f64 = 1.360e3;
/// Standard pressure (Pa)
pub const P_STD: f64 = 1.01325e5;
/// Standard temperature (K)
pub const T_STD: f64 = 273.15;
/// Molar volume (cm³ atm)
pub const MOLAR_VOLUME: f64 = 2.2421e4;
/// Avogadro's number (1/mol)
pub const N_AVOGADRO: f64 = 6.0221367e23;

/// Molar mass of dry air (g/mol)
pub const MW_DRY_AIR: f64 = 28.964;
/// Molar mass of water (g/mol)
pub const MW_H2O: f64 = 18.016;
/// Molar mass of carbon dioxide (g/mol)
pub const MW_CO2: f64 = 44.010;
/// Molar mass of ozone (g/mol)
pub const MW_O3: f64 = 48.000;
/// Molar mass of methane (g/mol)
pub const MW_CH4: f64 = 16.042;
/// Molar mass of nitrous oxide (g/mol)
pub const MW_N2O: f64 = 44.016;

/// Ratio between the molar masses of water vapor and dry air
pub const EPSILON: f64 = MW_H2O / MW_DRY_AIR;
/// Virtual temperature scaling factor using [`EPSILON`]
pub const F_VIRT: f64 = (1. - EPSILON) / EPSILON;

/// Rayleigh scattering cross section per shortwave band (cm²/molecule).
pub const RAYLEIGH_CROSS_SECTION: [f64; N_SW_BANDS] = [
    1.19234e-26,
    7.6491e-28,
    9.0856e-29,
    1.97266e-29,
    6.13005e-30,
    2.06966e-30,
];
