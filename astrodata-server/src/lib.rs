use axum::Router;

use crate::context::Context;

mod api;
mod catalog;
mod context;
mod error;
mod server;

pub use crate::{
    error::Error,
    server::Server,
};

#[derive(Clone, Debug, Default)]
pub struct Builder;

impl Builder {
    pub fn build(self) -> Router<()> {
        let context = Context::new();
        crate::api::router().with_state(context)
    }
}
