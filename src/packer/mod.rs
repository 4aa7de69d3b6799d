pub mod bounded;
pub mod guillotine;
pub mod unbounded;
