/// Error taxonomy shared by every module.
pub mod error;
