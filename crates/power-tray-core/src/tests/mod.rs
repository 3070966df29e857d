mod command;
mod cycle;
mod doubles;
mod resolver;
mod scheme_id;
