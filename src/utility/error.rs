#[derive(thiserror::Error, Debug)]
#[error("Invalid value {0:?}, expected one of: {1:?}")]
pub struct NotInList(pub String, pub Vec<&'static str>);
