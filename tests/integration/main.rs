mod commands;
mod menu;
mod persist;
