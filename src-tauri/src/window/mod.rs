pub mod geometry;
pub mod shell;
