//! Reference data: the amino-acid alphabet and distance scales.
pub mod alphabet;
pub mod scales;
