use crate::splay::Axis;
use thiserror::Error;

/// Errors reported by `BiMap` operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A lookup found no entry with the given key.
    #[error("key not found on the {axis} axis")]
    KeyNotFound { axis: Axis },
    /// An insert was rejected because the key is already present.
    #[error("duplicate key on the {axis} axis")]
    DuplicateKey { axis: Axis },
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::splay::Axis;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::KeyNotFound { axis: Axis::Left }.to_string(),
            "key not found on the left axis",
        );
        assert_eq!(
            Error::DuplicateKey { axis: Axis::Right }.to_string(),
            "duplicate key on the right axis",
        );
    }
}
