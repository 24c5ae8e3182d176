#![allow(dead_code)]

pub mod coord;
pub mod point;
pub mod polygon;
