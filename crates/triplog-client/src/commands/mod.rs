pub mod export;
pub mod summary;
pub mod trip;
