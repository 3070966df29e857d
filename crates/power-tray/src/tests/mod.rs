mod app;
mod config;
