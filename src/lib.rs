//! Bookstore application library: the resource modules mounted by the
//! kernel's module registry.

pub mod modules;
