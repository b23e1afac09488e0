use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use silly_application::error::{AppError, BError};
use silly_core::usecases::Error as ParameterError;
use thiserror::Error;

use super::frontend::view;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(BError::Parameter(err))) => {
                warn!("Rejected request {}: {err}", req.uri());
                (Status::BadRequest, view::failure()).respond_to(req)
            }
            Error::App(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
