use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Submitted form data failed field validation.
    #[error("{0}")]
    Form(String),
    /// Submitted time entry broke one or more entry rules.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
    /// A value could not be converted into a domain type.
    #[error("invalid data: {0}")]
    TypeConstraint(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
