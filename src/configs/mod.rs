mod endpoint;

pub use endpoint::{
    directory_endpoint,
    resolve_endpoint,
    DEFAULT_DIRECTORY_ENDPOINT,
    DIRECTORY_ENDPOINT_VAR,
};
