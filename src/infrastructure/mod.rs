pub mod aws;
pub mod clock;
pub mod observability;
pub mod storage;
