pub mod agent;
pub mod codec;
pub mod compressor;
pub mod engine;
pub mod error;
pub mod initializer;
pub mod params;
pub mod state;
pub mod validation;

mod tensor;
mod util;
