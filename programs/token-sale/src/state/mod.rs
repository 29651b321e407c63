pub mod participant;
pub mod sale;

pub use participant::*;
pub use sale::*;
