//! Command handlers for `microtpl`.
//!
//! Each module handles one subcommand against the shared [`App`](crate::app::App).

pub(crate) mod config;
pub(crate) mod insert;
pub(crate) mod list;
pub(crate) mod render;
pub(crate) mod select_dir;

pub(crate) use config::handle_config_command;
pub(crate) use insert::handle_insert_command;
pub(crate) use list::handle_list_command;
pub(crate) use render::handle_render_command;
pub(crate) use select_dir::handle_select_dir_command;
