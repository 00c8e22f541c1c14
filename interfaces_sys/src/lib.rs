// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Platform classification and raw OS bindings for the `interfaces` crate.

extern crate libc;

pub mod platform;

#[cfg(unix)]
pub mod bindings;

#[cfg(unix)]
pub mod lladdr;

#[cfg(unix)]
#[path = "unix.rs"]
mod imp;

#[cfg(unix)]
pub use self::imp::*;

pub use self::platform::{
    ClassifyError, PlatformFlags, TargetSymbols, IS_BSD, IS_IOS, IS_IOS_SIMULATOR, IS_LINUX,
    IS_MACOS, IS_POSIX, IS_UNIX, IS_WIN32, IS_WIN64, IS_WINDOWS,
};
