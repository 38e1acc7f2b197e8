use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StellarError {
    #[error("stellar mass must be positive, got {0} M☉")]
    NonPositiveMass(f64),

    #[error("stellar radius must be positive, got {0} R☉")]
    NonPositiveRadius(f64),
}
