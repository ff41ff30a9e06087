//! Domain models for Bloom & Grow

mod harvest;
mod planting;
mod prep;
mod recipe;
mod sale;
mod setup;
mod space;

pub use harvest::*;
pub use planting::*;
pub use prep::*;
pub use recipe::*;
pub use sale::*;
pub use setup::*;
pub use space::*;
