mod checker;

pub use checker::ConformanceChecker;
