//! Parameter tensors
//!
//! A [`Tensor`] is the handle the pruning operators read and write through:
//! a flat `f32` buffer with its logical shape and an optional gradient
//! buffer filled by the external backward pass.

mod tensor;

#[cfg(test)]
mod tests;

pub use tensor::Tensor;
