use astrodata_protocol::{
    model::star::{
        CreateStar,
        Star,
        StarId,
    },
    ServerStatus,
};
use axum::{
    extract::{
        Path,
        State,
    },
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
    routing,
    Json,
    Router,
};

use crate::{
    context::Context,
    error::Error,
};

pub fn router() -> Router<Context> {
    Router::new()
        .route("/status", routing::get(get_status))
        .route("/stars", routing::get(get_stars).post(create_star))
        .route("/stars/:id", routing::get(get_star).delete(delete_star))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::StarNotFound { .. } => StatusCode::NOT_FOUND,
            Error::StarAlreadyExists { .. } => StatusCode::CONFLICT,
            _ => {
                tracing::error!(error = ?self, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

async fn get_status(State(context): State<Context>) -> Json<ServerStatus> {
    Json(ServerStatus {
        server_version: semver_macro::env_version!("CARGO_PKG_VERSION"),
        up_since: context.up_since,
    })
}

async fn get_stars(State(context): State<Context>) -> Json<Vec<Star>> {
    Json(context.catalog().await.list())
}

async fn get_star(
    State(context): State<Context>,
    Path(id): Path<StarId>,
) -> Result<Json<Star>, Error> {
    let catalog = context.catalog().await;
    let star = catalog.get(id).ok_or(Error::StarNotFound { id })?;
    Ok(Json(star.clone()))
}

async fn create_star(
    State(context): State<Context>,
    Json(request): Json<CreateStar>,
) -> Result<(StatusCode, Json<Star>), Error> {
    let star = context.catalog_mut().await.insert(request)?;
    Ok((StatusCode::CREATED, Json(star)))
}

async fn delete_star(
    State(context): State<Context>,
    Path(id): Path<StarId>,
) -> Result<StatusCode, Error> {
    context
        .catalog_mut()
        .await
        .remove(id)
        .ok_or(Error::StarNotFound { id })?;
    Ok(StatusCode::NO_CONTENT)
}
