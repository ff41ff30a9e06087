//! Business logic services for Bloom & Grow

pub mod bouquet;
pub mod harvest;
pub mod onboarding;
pub mod planting;
pub mod prep;
pub mod sales;
pub mod setup;
pub mod spaces;

pub use harvest::HarvestLedger;
pub use onboarding::OnboardingGate;
pub use planting::PlantingLog;
pub use prep::PrepBoard;
pub use sales::SalesLedger;
pub use setup::GardenSetupStore;
pub use spaces::PlantingSpaceRegistry;
