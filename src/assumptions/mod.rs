//! Fixed assumptions behind every projection run

mod baseline;

pub use baseline::BaselineConstants;
