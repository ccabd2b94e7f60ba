// error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RemoteError {
    #[error("No command assigned to this button")]
    NoCommandAssigned,
}
