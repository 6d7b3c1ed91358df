mod onboarding;
pub use onboarding::Onboarding;

mod dashboard;
pub use dashboard::Dashboard;
