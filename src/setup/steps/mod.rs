//! Setup wizard steps
//!
//! One prompt sequence per onboarding step.

pub mod energy;
pub mod goals;
pub mod preferences;
pub mod smart_home;

pub use energy::EnergyProfileStep;
pub use goals::EnergyGoalsStep;
pub use preferences::PreferencesStep;
pub use smart_home::SmartHomeStep;
