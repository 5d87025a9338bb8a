//! Business logic for the scheduling core.
//!
//! Three services share one store through the repository traits:
//! - [`availability`]: the availability ledger (slot ownership)
//! - [`scheduler`]: the member-driven session lifecycle
//! - [`rooms`]: admin-side room assignment and validation
//!
//! Each mutating operation is a single atomic unit under a transaction scope
//! lock; see the `db` module docs for the boundary semantics.

pub mod availability;
pub mod error;
pub mod rooms;
pub mod scheduler;

pub use availability::{add_availability, list_active_availability};
pub use error::{SchedulingError, SchedulingResult};
pub use rooms::assign_room;
pub use scheduler::{cancel_session, request_session, reschedule_session, trainer_schedule};
