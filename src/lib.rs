// ============================================================================
// SHIPMENT TRACKER - FRONTEND MVVM (Rust + Yew)
// ============================================================================
// - Components: render only
// - Hooks: wire viewmodels into Yew state
// - ViewModels: session guard, paging, workflows
// - State: shared Rc<RefCell> state
// - Services: backend communication only
// - Models: wire types shared with the backend
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

pub use components::App;
pub use error::AppError;
