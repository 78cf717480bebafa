// src/application/commands/groups/mod.rs
mod create;
mod service;

pub use create::CreateGroupCommand;
pub use service::GroupCommandService;
