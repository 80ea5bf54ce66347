pub mod share_calculator;
pub mod validator;

pub use share_calculator::ShareCalculator;
pub use validator::Validator;
