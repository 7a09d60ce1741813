//! Core units and constants shared across the NEO Impact Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Joules per megaton of TNT equivalent.
    pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;
    /// Default bulk density for a rocky (stony) asteroid (kg/m³).
    pub const ROCKY_ASTEROID_DENSITY_KG_M3: f64 = 2600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }
}
