// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linux specific definitions.

/// The `request` argument type of `ioctl(2)`.
#[cfg(all(target_os = "linux", not(target_env = "musl")))]
pub type IoctlRequest = libc::c_ulong;
#[cfg(any(target_env = "musl", target_os = "android"))]
pub type IoctlRequest = libc::c_int;

pub const SIOCGIFHWADDR: IoctlRequest = libc::SIOCGIFHWADDR as IoctlRequest;
pub const SIOCGIFFLAGS: IoctlRequest = libc::SIOCGIFFLAGS as IoctlRequest;
pub const SIOCSIFFLAGS: IoctlRequest = libc::SIOCSIFFLAGS as IoctlRequest;
pub const SIOCGIFMTU: IoctlRequest = libc::SIOCGIFMTU as IoctlRequest;

/// Address family of link-layer entries returned by `getifaddrs`.
pub const AF_PACKET: libc::c_int = libc::AF_PACKET;
