//! Reusable UI components.

mod artwork_upload;
mod breadcrumb;
mod game_card;
mod layout;
mod module_card;
mod progress_tracker;
mod tab_bar;
mod teacher_notes;

pub use artwork_upload::ArtworkUpload;
pub use breadcrumb::Breadcrumb;
pub use game_card::GameCard;
pub use layout::Layout;
pub use module_card::ModuleCard;
pub use progress_tracker::ProgressTracker;
pub use tab_bar::TabBar;
pub use teacher_notes::{NotesState, TeacherNotes};
