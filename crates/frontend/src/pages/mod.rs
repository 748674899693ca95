//! Page components.

mod games;
mod landing;
mod parent;
mod portfolio;
mod teacher;
mod whatsup;

pub use games::GamesPage;
pub use landing::LandingPage;
pub use parent::ParentPortalPage;
pub use portfolio::PortfolioPage;
pub use teacher::TeacherDashboardPage;
pub use whatsup::WhatsUpPage;
