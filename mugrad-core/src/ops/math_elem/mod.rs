pub mod exp;
pub mod tanh;
