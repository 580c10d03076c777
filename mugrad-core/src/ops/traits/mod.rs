pub mod numeric;

pub use numeric::MugradScalar;
