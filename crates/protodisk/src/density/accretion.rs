use units::{Length, Mass, MassRate, VolumeDensity};

use crate::constants::{G, PI};

/// Reference density of a rotating infalling envelope.
///
/// ρ₀ = Ṁ / (4π √(G M★ r_d³))
///
/// This normalises both the Ulrich envelope and the disc, which is scaled
/// relative to the envelope at the centrifugal radius.
///
/// # Arguments
/// * `infall_rate` - Envelope mass infall rate
/// * `centrifugal_radius` - Radius where the outermost streamline reaches the midplane
/// * `stellar_mass` - Central mass
pub fn envelope_reference_density(
    infall_rate: MassRate,
    centrifugal_radius: Length,
    stellar_mass: Mass,
) -> VolumeDensity {
    let rd = centrifugal_radius.to_m();
    let rho0 = infall_rate.to_kg_per_sec() / (4.0 * PI * (G * stellar_mass.to_kg() * rd.powi(3)).sqrt());
    VolumeDensity::from_kg_per_m3(rho0)
}
