#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact.invalid_handle")]
    InvalidHandle,
}
