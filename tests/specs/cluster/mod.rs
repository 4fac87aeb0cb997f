mod agent;
mod config;
mod proxy;
mod resources;
