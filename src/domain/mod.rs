pub mod errors;
pub mod participant;
