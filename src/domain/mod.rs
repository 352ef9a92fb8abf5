//! Pure coordinate math for the ruler.
//!
//! These functions are stateless and can be tested independently.

pub mod ruler_geometry;
