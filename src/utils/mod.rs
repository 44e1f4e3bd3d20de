mod timer;

pub use timer::sleep;
