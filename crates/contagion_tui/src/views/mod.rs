pub mod histogram;
pub mod status;
