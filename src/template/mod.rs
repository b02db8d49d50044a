mod template;

pub use template::*;
