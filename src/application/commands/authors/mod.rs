// src/application/commands/authors/mod.rs
mod register;
mod service;

pub use register::RegisterAuthorCommand;
pub use service::AuthorCommandService;
