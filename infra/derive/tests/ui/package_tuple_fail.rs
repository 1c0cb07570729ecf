use bindery_derive::package;

#[package]
pub struct Pager(u32);

fn main() {}
