// ============================================================================
// STATE MODULE - Shared state with Rc<RefCell>
// ============================================================================

pub mod list_state;
pub mod session_state;

pub use list_state::{near_end, ApplyOutcome, PageTicket, PagedListState};
pub use session_state::SessionState;
