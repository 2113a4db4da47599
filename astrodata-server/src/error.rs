use astrodata_protocol::model::star::StarId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("axum error")]
    Axum(#[from] axum::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("star not found: {id}")]
    StarNotFound { id: StarId },

    #[error("star with name {name:?} already exists (id: {id})")]
    StarAlreadyExists { name: String, id: StarId },
}
