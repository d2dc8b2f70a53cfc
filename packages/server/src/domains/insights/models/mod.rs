mod insight;

pub use insight::*;
