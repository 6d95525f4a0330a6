pub mod digest;
pub mod extremes;
pub mod maps;
pub mod mvp;
pub mod skill_changes;
pub mod window;

pub use digest::Highlights;
pub use extremes::ImpactCoefficients;
