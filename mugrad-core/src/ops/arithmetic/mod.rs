// Foundational arithmetic constructors. Each file adds methods to `Graph`.
pub mod add;
pub mod div;
pub mod mul;
pub mod pow;
pub mod sub;
