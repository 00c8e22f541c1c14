// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # interfaces
//!
//! `interfaces` lists and controls the network interfaces of a system.
//!
//! ```rust,no_run
//! use interfaces::Interface;
//!
//! for iface in Interface::get_all().expect("could not get interfaces") {
//!     println!("{} up={} mtu={:?}", iface.name, iface.is_up(), iface.get_mtu().ok());
//!     if let Ok(mac) = iface.hardware_addr() {
//!         println!("  ether {}", mac);
//!     }
//!     for addr in &iface.addresses {
//!         println!("  {} {:?}", addr.kind, addr.addr);
//!     }
//! }
//! ```
//!
//! The platform the crate was built for is available as compile-time flags in [`platform`].
//! Targets that cannot be classified fail to build.
//!
//! Interface enumeration is available on Unix platforms only.

#![deny(missing_docs)]

extern crate ipnetwork;
extern crate libc;

pub use interfaces_base::{HardwareAddr, ParseHardwareAddrErr, HARDWARE_ADDR_LEN};
pub use interfaces_sys::platform;

pub use error::{InterfacesError, Result};
pub use flags::InterfaceFlags;

mod error;

/// Submodule containing the interface flags.
pub mod flags;

#[cfg(unix)]
mod address;
#[cfg(unix)]
mod interface;

#[cfg(unix)]
pub use address::{Address, Kind, NextHop};
#[cfg(unix)]
pub use interface::Interface;
