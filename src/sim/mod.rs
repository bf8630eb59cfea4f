pub mod builder;
pub mod event;
pub mod finder;
pub mod records;
