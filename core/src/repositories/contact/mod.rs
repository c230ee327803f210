//! Contact repository module.

mod r#trait;
pub use r#trait::ContactRepository;

mod memory;
pub use memory::InMemoryContactRepository;

#[cfg(test)]
mod tests;
