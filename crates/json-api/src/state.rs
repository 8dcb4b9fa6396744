//! Shared handler state.

use std::sync::Arc;

use stockroom_app::context::AppContext;

/// Application context as every handler sees it, injected into the depot
/// ahead of the product routes.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    /// Wrap the context for injection.
    #[must_use]
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
