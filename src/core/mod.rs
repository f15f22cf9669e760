pub mod backup;
pub mod overtime;
pub mod submit;
