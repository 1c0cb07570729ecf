use bindery_derive::package;

#[package]
pub enum Picker {
    Camera,
    Gallery,
}

fn main() {}
