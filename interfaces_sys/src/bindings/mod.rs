// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(non_camel_case_types)]

use std::io;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use self::linux::*;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos",
    target_os = "visionos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub mod bsd;
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos",
    target_os = "visionos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
pub use self::bsd::*;

pub const IFNAMSIZ: usize = 16;

// Size of the request union in `struct ifreq`. The Linux union holds a `struct ifmap`, NetBSD
// adds a `sockaddr_storage`.
#[cfg(any(target_os = "linux", target_os = "android"))]
const IFREQ_DATA_SIZE: usize = 24;
#[cfg(target_os = "netbsd")]
const IFREQ_DATA_SIZE: usize = 128;
#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "netbsd")))]
const IFREQ_DATA_SIZE: usize = 16;

/// The members of the `ifreq` request union that are used here.
#[repr(C)]
#[derive(Clone, Copy)]
pub union ifreq_data {
    pub ifru_addr: libc::sockaddr,
    pub ifru_hwaddr: libc::sockaddr,
    pub ifru_flags: libc::c_short,
    pub ifru_mtu: libc::c_int,
    ifru_pad: [u8; IFREQ_DATA_SIZE],
}

// See /usr/include/net/if.h
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ifreq {
    pub ifr_name: [libc::c_char; IFNAMSIZ],
    pub ifr_ifru: ifreq_data,
}

impl ifreq {
    /// A zeroed request for the interface `name`.
    ///
    /// Names that do not fit alongside their NUL terminator, or that contain a NUL byte, are
    /// rejected.
    pub fn with_name(name: &str) -> io::Result<ifreq> {
        let bytes = name.as_bytes();
        if bytes.len() >= IFNAMSIZ || bytes.contains(&0) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid interface name: {:?}", name),
            ));
        }

        let mut req = ifreq {
            ifr_name: [0; IFNAMSIZ],
            ifr_ifru: ifreq_data {
                ifru_pad: [0; IFREQ_DATA_SIZE],
            },
        };
        for (dst, src) in req.ifr_name.iter_mut().zip(bytes) {
            *dst = *src as libc::c_char;
        }
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn ifreq_name_is_nul_terminated() {
        let req = ifreq::with_name("lo0").unwrap();
        assert_eq!(req.ifr_name[..4], [b'l' as libc::c_char, b'o' as _, b'0' as _, 0]);
    }

    #[test]
    fn ifreq_name_too_long() {
        let err = ifreq::with_name("a-very-long-ifname").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(ifreq::with_name("bad\0name").is_err());
    }

    #[test]
    fn ifreq_is_at_least_as_large_as_the_system_one() {
        assert!(mem::size_of::<ifreq>() >= IFNAMSIZ + mem::size_of::<libc::sockaddr>());
        assert_eq!(mem::offset_of!(ifreq, ifr_ifru), IFNAMSIZ);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn ifreq_matches_libc() {
        assert!(mem::size_of::<ifreq>() >= mem::size_of::<libc::ifreq>());
    }
}
