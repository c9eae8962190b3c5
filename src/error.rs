use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to allocate storage for {capacity} records")]
    AllocationFailure { capacity: usize },

    #[error("Database is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid record specification: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
