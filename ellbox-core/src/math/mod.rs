pub mod angle;
pub mod sampled;
