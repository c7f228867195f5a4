//! Client-side session, route protection and navigation filtering for the
//! employee dashboard. Free of UI dependencies so it can be tested natively.

pub mod gate;
pub mod guard;
pub mod nav;
pub mod routes;
pub mod session_store;
pub mod sidebar;
pub mod storage;

pub use gate::AuthGate;
pub use guard::{decide, decide_for, GuardDecision};
pub use nav::{visible_entries, NavEntry, NavIcon, MENU};
pub use routes::{RouteDescriptor, ROUTES};
pub use session_store::SessionStore;
pub use sidebar::SidebarView;
pub use storage::{KeyValueStore, MemoryStore, PlatformStore};
