pub mod error;
pub mod evaluator;
pub mod object;

pub use evaluator::eval;

#[cfg(test)]
mod tests;
