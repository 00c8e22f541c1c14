// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;

use thiserror::Error;

/// The error type returned by all fallible functions in this crate.
#[derive(Debug, Error)]
pub enum InterfacesError {
    /// An underlying system call failed. Carries the OS error (`errno`).
    #[error("system call failed: {0}")]
    Io(#[from] io::Error),

    /// Something required for this operation is not supported on this platform or computer.
    /// The string names what is missing.
    #[error("not supported: {0}")]
    NotSupported(&'static str),
}

impl InterfacesError {
    /// An `InterfacesError` holding the current value of `errno`.
    pub fn last_os_error() -> InterfacesError {
        InterfacesError::Io(io::Error::last_os_error())
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = ::std::result::Result<T, InterfacesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = InterfacesError::NotSupported("AF_LINK");
        assert_eq!(err.to_string(), "not supported: AF_LINK");

        let err = InterfacesError::from(io::Error::from_raw_os_error(libc::EPERM));
        assert!(err.to_string().starts_with("system call failed: "));
        match err {
            InterfacesError::Io(e) => assert_eq!(e.raw_os_error(), Some(libc::EPERM)),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
