pub mod echo_dto;
pub mod stats_dto;
