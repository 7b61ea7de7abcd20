mod all;
mod footer;
mod log;
mod search;
mod table;
mod tabs;

use super::*;

pub use all::all as render;
