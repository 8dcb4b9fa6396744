//! Handler plumbing.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Access to the application state injected ahead of every route.
pub(crate) trait StateExt {
    /// The shared [`State`], or a bare 500 when the injection hoop is
    /// missing (a router wiring bug, never a caller mistake).
    fn app_state(&self) -> Result<&Arc<State>, StatusError>;
}

impl StateExt for Depot {
    fn app_state(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
