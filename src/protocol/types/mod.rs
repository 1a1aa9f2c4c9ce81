//! PNG chunk type implementations
//!
//! Only the three critical chunks an RGB image needs are implemented.

pub mod idat;
pub mod iend;
pub mod ihdr;

pub use idat::IdatChunk;
pub use iend::IendChunk;
pub use ihdr::{ColorType, IhdrChunk, MAX_DIMENSION};
