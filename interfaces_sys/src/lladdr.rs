// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Link-layer address extraction from `ifaddrs` records.
//!
//! On BSD and Apple targets the link-layer entry of an interface is a `sockaddr_dl`, and the
//! hardware address lives inside `sdl_data`, right after the interface name. [`rust_LLADDR`]
//! exposes the position of those bytes across the C ABI. Linux and Android describe the same
//! entry with a `sockaddr_ll`; no symbol is exported there.

#[cfg(not(any(target_os = "linux", target_os = "android")))]
use std::{ptr, slice};

use crate::bindings;

/// Returns a pointer to the first hardware-address byte of a link-layer `ifaddrs` record.
///
/// This is the `LLADDR()` macro of `<net/if_dl.h>`: `sdl_data + sdl_nlen`. The number of
/// address bytes is `sdl_alen` of the same record (6 for Ethernet); the caller has to look it
/// up, nothing here bounds it.
///
/// # Safety
///
/// `ifap` must point to a live `ifaddrs` record whose `ifa_addr` is a non-null `AF_LINK`
/// address, as produced by `getifaddrs`. Any other family is undefined behaviour. The returned
/// pointer borrows from the record and must not be used after `freeifaddrs`.
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
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn rust_LLADDR(ifap: *mut libc::ifaddrs) -> *mut u8 {
    let sdl = (*ifap).ifa_addr as *mut bindings::sockaddr_dl;
    let data = ptr::addr_of_mut!((*sdl).sdl_data) as *mut u8;
    data.add((*sdl).sdl_nlen as usize)
}

/// Returns the hardware-address bytes of a link-layer `ifaddrs` record.
///
/// Unlike [`rust_LLADDR`] this checks the address family first and bounds the slice by the
/// length stored in the record. Returns `None` for records without an address or with an
/// address of another family.
///
/// # Safety
///
/// `ifa` must be a record produced by `getifaddrs` (or laid out identically), still owned by
/// its list.
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
pub unsafe fn link_addr(ifa: &libc::ifaddrs) -> Option<&[u8]> {
    let sa = ifa.ifa_addr;
    if sa.is_null() || (*sa).sa_family as libc::c_int != bindings::AF_LINK {
        return None;
    }
    let sdl = sa as *const bindings::sockaddr_dl;
    let len = (*sdl).sdl_alen as usize;
    let data = rust_LLADDR(ifa as *const libc::ifaddrs as *mut libc::ifaddrs);
    Some(slice::from_raw_parts(data, len))
}

/// Returns the hardware-address bytes of a link-layer `ifaddrs` record.
///
/// Linux reports link-layer entries as `AF_PACKET` records carrying a `sockaddr_ll`; the
/// address is `sll_addr`, `sll_halen` bytes long. Returns `None` for records without an
/// address or with an address of another family.
///
/// # Safety
///
/// `ifa` must be a record produced by `getifaddrs` (or laid out identically), still owned by
/// its list.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub unsafe fn link_addr(ifa: &libc::ifaddrs) -> Option<&[u8]> {
    let sa = ifa.ifa_addr;
    if sa.is_null() || (*sa).sa_family as libc::c_int != bindings::AF_PACKET {
        return None;
    }
    let sll = sa as *const libc::sockaddr_ll;
    let addr = &(*sll).sll_addr;
    let len = ((*sll).sll_halen as usize).min(addr.len());
    Some(&addr[..len])
}
