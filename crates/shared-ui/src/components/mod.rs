// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod loading;

// Primitive wrappers
pub mod confirm_dialog;
pub mod progress;

// Layout
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use form_select::*;
pub use input::*;
pub use loading::*;
pub use progress::*;
pub use sidebar::*;
