// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! BSD and Apple specific definitions.

use std::mem;

use super::ifreq;

/// The `request` argument type of `ioctl(2)`.
pub type IoctlRequest = libc::c_ulong;

/// Address family of link-layer entries returned by `getifaddrs`.
pub const AF_LINK: libc::c_int = libc::AF_LINK;

const IOC_IN: libc::c_ulong = 0x80000000;
const IOC_OUT: libc::c_ulong = 0x40000000;
const IOC_INOUT: libc::c_ulong = IOC_IN | IOC_OUT;
const IOCPARM_MASK: libc::c_ulong = 0x1fff;

const SIZEOF_IFREQ: libc::c_ulong = mem::size_of::<ifreq>() as libc::c_ulong;

const fn ioc(inout: libc::c_ulong, group: u8, num: libc::c_ulong) -> IoctlRequest {
    inout | ((SIZEOF_IFREQ & IOCPARM_MASK) << 16) | ((group as libc::c_ulong) << 8) | num
}

pub const SIOCSIFFLAGS: IoctlRequest = ioc(IOC_IN, b'i', 16);
pub const SIOCGIFFLAGS: IoctlRequest = ioc(IOC_INOUT, b'i', 17);
#[cfg(not(any(target_os = "openbsd", target_os = "netbsd")))]
pub const SIOCGIFMTU: IoctlRequest = ioc(IOC_INOUT, b'i', 51);
#[cfg(any(target_os = "openbsd", target_os = "netbsd"))]
pub const SIOCGIFMTU: IoctlRequest = ioc(IOC_INOUT, b'i', 126);

// See /usr/include/net/if_dl.h
// sdl_data is declared with its minimum size. The name and the address bytes follow each
// other from its first byte and may run past the end of the declared array, so it must only
// be read through raw pointers into a record allocated by the system.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct sockaddr_dl {
    pub sdl_len: libc::c_uchar,
    pub sdl_family: libc::c_uchar,
    pub sdl_index: libc::c_ushort,
    pub sdl_type: libc::c_uchar,
    pub sdl_nlen: libc::c_uchar,
    pub sdl_alen: libc::c_uchar,
    pub sdl_slen: libc::c_uchar,
    pub sdl_data: [libc::c_char; 12],
}
