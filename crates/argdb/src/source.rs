use crate::{ArgDescriptor, ArgValue};

/// Key/value configuration consulted by build components.
///
/// Components only need two capabilities: reading a value by key and
/// declaring the type of the keys they own. [`ArgDatabase`](crate::ArgDatabase)
/// is the in-memory implementation; embedders with their own configuration
/// store implement this trait instead.
pub trait ConfigSource {
    /// Returns the value stored under `key`, falling back to the registered
    /// descriptor's default. `None` means the key is unset and has no default.
    fn lookup(&self, key: &str) -> Option<ArgValue>;

    /// Declares the type of `key`. Registering a key twice replaces the
    /// earlier descriptor.
    fn register_type(&mut self, key: &str, descriptor: ArgDescriptor);
}
