pub mod intersect;
pub mod r2;
