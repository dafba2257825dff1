use crate::faa::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load aircraft reference data")]
    Types(#[source] LoadError),
    #[error("failed to load registration data")]
    Registrations(#[source] LoadError),
}
