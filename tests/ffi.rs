// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exercises the exported link-layer symbol the way a foreign caller links against it.

#![cfg(any(
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

extern crate interfaces;
extern crate libc;

use std::ptr;
use std::slice;

use interfaces::{HardwareAddr, Interface};

extern "C" {
    fn rust_LLADDR(ifap: *mut libc::ifaddrs) -> *mut u8;
}

/// Calls the extractor through its unmangled C name for every `AF_LINK` record of the system,
/// and compares the bytes with what the safe API reports.
#[test]
fn lladdr_symbol_matches_hardware_addr() {
    let mut head: *mut libc::ifaddrs = ptr::null_mut();
    assert_eq!(unsafe { libc::getifaddrs(&mut head) }, 0);

    let mut cur = head;
    while !cur.is_null() {
        let this = cur;
        let ifa = unsafe { &*this };
        cur = ifa.ifa_next;

        if ifa.ifa_addr.is_null()
            || unsafe { (*ifa.ifa_addr).sa_family } as libc::c_int != libc::AF_LINK
        {
            continue;
        }
        let sdl = ifa.ifa_addr as *const u8;
        // sdl_alen, see <net/if_dl.h>
        let alen = unsafe { *sdl.add(6) } as usize;
        if alen != 6 {
            continue;
        }

        let raw = unsafe { rust_LLADDR(this) };
        let bytes = unsafe { slice::from_raw_parts(raw, alen) };
        let name = unsafe { std::ffi::CStr::from_ptr(ifa.ifa_name) }
            .to_str()
            .unwrap();

        let iface = Interface::get_by_name(name).unwrap().unwrap();
        assert_eq!(
            iface.hardware_addr().unwrap(),
            HardwareAddr::from_slice(bytes).unwrap()
        );
    }

    unsafe { libc::freeifaddrs(head) };
}
