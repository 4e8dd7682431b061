pub mod date_taken;
pub mod photo;
pub mod step;
