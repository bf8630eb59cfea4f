pub mod cell;
pub mod grid;
pub mod path_stack;
pub mod rules;
