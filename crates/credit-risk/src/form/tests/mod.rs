mod common;
mod component;
