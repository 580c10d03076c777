pub mod relu;
