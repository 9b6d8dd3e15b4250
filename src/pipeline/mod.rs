pub mod aggregate;
pub mod infer;
pub mod split;

use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A keyless batch would be unloadable, so the whole run aborts.
    #[error("dataset '{entity}' has no id column")]
    MissingKeyColumn { entity: String },
    #[error("dataset '{entity}' ({path}): {source}")]
    Input {
        entity: String,
        path: PathBuf,
        #[source]
        source: InputError,
    },
}
