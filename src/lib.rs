//! Cubehelix color tables.
//!
//! A cubehelix map runs from black to white along a tapered helix in RGB
//! space, so perceived brightness increases monotonically while the hue
//! rotates. See D. A. Green, "A colour scheme for the display of
//! astronomical intensity images" (2011).

mod color;
pub use color::*;

mod error;
pub use error::*;

mod params;
pub use params::*;

mod table;
pub use table::*;
