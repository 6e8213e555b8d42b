mod create;
mod delete;
mod import;
mod update;

pub use update::apply_patch;
