//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use stockroom_app::{context::AppContext, products::MockProductsService};

use crate::{rpc, state::State};

pub(crate) fn rpc_service(products: MockProductsService) -> Service {
    let state = State::shared(AppContext {
        products: Arc::new(products),
    });

    Service::new(
        Router::new()
            .hoop(inject(state))
            .push(Router::with_path("rpc").post(rpc::handler)),
    )
}
