pub mod admin_dto;
pub mod content_dto;
pub mod quiz_dto;
