pub mod dto;
pub mod error_mapper;
pub mod router;
