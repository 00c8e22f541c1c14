// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interface listing and control for Unix platforms.

use std::collections::HashMap;

use log::{debug, trace};

use interfaces_sys::bindings::{self, ifreq};
use interfaces_sys::{ifaddr_name, ifaddr_next_hop, sockaddr_to_addr, FileDesc, IfAddrs};

use crate::{Address, HardwareAddr, InterfaceFlags, Kind, NextHop, Result, HARDWARE_ADDR_LEN};

/// A single network interface of the system, with methods to control it.
#[derive(Debug)]
pub struct Interface {
    /// The name of this interface.
    pub name: String,

    /// All addresses of this interface.
    pub addresses: Vec<Address>,

    /// Interface flags.
    ///
    /// NOTE: the system reports flags per address, not per interface. They are assumed equal
    /// and taken from the first address.
    pub flags: InterfaceFlags,

    // Socket used as the handle for ioctls on this interface.
    sock: FileDesc,
}

impl Interface {
    /// Retrieve a list of all interfaces on this system, in the order the system lists them.
    pub fn get_all() -> Result<Vec<Interface>> {
        let list = IfAddrs::new()?;

        let mut ifs: Vec<Interface> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for ifa in &list {
            // Only support interfaces with valid names.
            let name = match ifaddr_name(ifa) {
                Some(n) => n,
                None => {
                    trace!("skipping interface address with a non UTF-8 name");
                    continue;
                }
            };

            let idx = match by_name.get(name) {
                Some(&idx) => idx,
                None => {
                    let iface = match Interface::new_from_ifaddr(name, ifa) {
                        Ok(i) => i,
                        Err(e) => {
                            debug!("skipping interface {}: {}", name, e);
                            continue;
                        }
                    };
                    ifs.push(iface);
                    by_name.insert(name.to_owned(), ifs.len() - 1);
                    ifs.len() - 1
                }
            };

            if let Some(addr) = convert_ifaddr_address(ifa) {
                ifs[idx].addresses.push(addr);
            }
        }

        debug!("found {} interfaces", ifs.len());
        Ok(ifs)
    }

    /// Returns the interface with the given name: `Ok(Some(..))` on success, `Ok(None)` if
    /// there is no such interface, and `Err(..)` on failure.
    ///
    /// ```no_run
    /// # use interfaces::{Interface, Result};
    /// # fn foo() -> Result<Option<Interface>> {
    /// let iface = Interface::get_by_name("lo")?;
    /// if let Some(ref lo) = iface {
    ///     assert!(lo.is_loopback());
    /// } else {
    ///     println!("Could not find loopback interface");
    /// }
    /// # Ok(iface)
    /// # }
    /// ```
    pub fn get_by_name(name: &str) -> Result<Option<Interface>> {
        let list = IfAddrs::new()?;

        let mut ret: Option<Interface> = None;
        for ifa in &list {
            if ifaddr_name(ifa) != Some(name) {
                continue;
            }

            let mut iface = match ret.take() {
                Some(i) => i,
                None => Interface::new_from_ifaddr(name, ifa)?,
            };
            if let Some(addr) = convert_ifaddr_address(ifa) {
                iface.addresses.push(addr);
            }
            ret = Some(iface);
        }

        Ok(ret)
    }

    fn new_from_ifaddr(name: &str, ifa: &libc::ifaddrs) -> Result<Interface> {
        let sock = FileDesc::control_socket()?;
        Ok(Interface {
            name: name.to_owned(),
            addresses: vec![],
            flags: InterfaceFlags::from_bits_truncate(ifa.ifa_flags as u32),
            sock,
        })
    }

    /// Returns whether this interface is up.
    pub fn is_up(&self) -> bool {
        self.flags.contains(InterfaceFlags::IFF_UP)
    }

    /// Returns whether this interface is a loopback interface.
    pub fn is_loopback(&self) -> bool {
        self.flags.contains(InterfaceFlags::IFF_LOOPBACK)
    }

    /// Retrieves the hardware address of this interface.
    pub fn hardware_addr(&self) -> Result<HardwareAddr> {
        self.hardware_addr_impl()
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn hardware_addr_impl(&self) -> Result<HardwareAddr> {
        let mut req = ifreq::with_name(&self.name)?;
        self.sock.ioctl(bindings::SIOCGIFHWADDR, &mut req)?;

        let data = unsafe { req.ifr_ifru.ifru_hwaddr }.sa_data;
        let mut addr = [0u8; 6];
        for (dst, src) in addr.iter_mut().zip(data.iter()) {
            *dst = *src as u8;
        }
        Ok(HardwareAddr::new(addr))
    }

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
    fn hardware_addr_impl(&self) -> Result<HardwareAddr> {
        use crate::InterfacesError;
        use interfaces_sys::lladdr;

        let list = IfAddrs::new()?;
        let link = list
            .iter()
            .filter(|ifa| ifaddr_name(ifa) == Some(self.name.as_str()))
            .find(|ifa| {
                !ifa.ifa_addr.is_null()
                    && Kind::from_family(unsafe { (*ifa.ifa_addr).sa_family } as i32)
                        == Kind::Link
            })
            .ok_or(InterfacesError::NotSupported("No AF_LINK"))?;

        let bytes = unsafe { lladdr::link_addr(link) }
            .ok_or(InterfacesError::NotSupported("No AF_LINK"))?;
        hardware_addr_from_link(bytes)
    }

    /// Sets the interface as up or down. This changes the status of the interface in the
    /// system, and updates the flags of this `Interface` instance.
    pub fn set_up(&mut self, up: bool) -> Result<()> {
        let mut req = ifreq::with_name(&self.name)?;
        self.sock.ioctl(bindings::SIOCGIFFLAGS, &mut req)?;

        // Toggle on the raw value: converting through InterfaceFlags would drop unknown bits.
        let up_bit = InterfaceFlags::IFF_UP.bits() as libc::c_short;
        let current = unsafe { req.ifr_ifru.ifru_flags };
        req.ifr_ifru.ifru_flags = if up {
            current | up_bit
        } else {
            current & !up_bit
        };

        self.sock.ioctl(bindings::SIOCSIFFLAGS, &mut req)?;

        let updated = unsafe { req.ifr_ifru.ifru_flags };
        self.flags = InterfaceFlags::from_bits_truncate(updated as u16 as u32);
        Ok(())
    }

    /// Retrieve the MTU of this interface.
    pub fn get_mtu(&self) -> Result<u32> {
        let mut req = ifreq::with_name(&self.name)?;
        self.sock.ioctl(bindings::SIOCGIFMTU, &mut req)?;
        Ok(unsafe { req.ifr_ifru.ifru_mtu } as u32)
    }

    /// The link-layer entry (`AF_LINK` or `AF_PACKET`) reported for this interface during
    /// enumeration, if any. Its `addr` is always `None`; use
    /// [`hardware_addr`](Interface::hardware_addr) for the address bytes.
    pub fn link_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.kind.is_link_layer())
    }
}

impl PartialEq for Interface {
    fn eq(&self, other: &Interface) -> bool {
        self.name == other.name
    }
}

impl Eq for Interface {}

/// Longer addresses such as EUI-64 are rejected rather than truncated.
#[cfg_attr(any(target_os = "linux", target_os = "android"), allow(dead_code))]
fn hardware_addr_from_link(bytes: &[u8]) -> Result<HardwareAddr> {
    match HardwareAddr::from_slice(bytes) {
        Some(addr) if bytes.len() == HARDWARE_ADDR_LEN => Ok(addr),
        _ => Err(crate::InterfacesError::NotSupported(
            "link-layer address is not 6 bytes long",
        )),
    }
}

fn convert_ifaddr_address(ifa: &libc::ifaddrs) -> Option<Address> {
    if ifa.ifa_addr.is_null() {
        return None;
    }

    let kind = Kind::from_family(unsafe { (*ifa.ifa_addr).sa_family } as i32);
    let addr = unsafe { sockaddr_to_addr(ifa.ifa_addr) };
    let mask = unsafe { sockaddr_to_addr(ifa.ifa_netmask) };

    let flags = InterfaceFlags::from_bits_truncate(ifa.ifa_flags as u32);
    let hop = unsafe { sockaddr_to_addr(ifaddr_next_hop(ifa)) }.map(|hop| {
        if flags.contains(InterfaceFlags::IFF_BROADCAST) {
            NextHop::Broadcast(hop)
        } else {
            NextHop::Destination(hop)
        }
    });

    Some(Address {
        kind,
        addr,
        mask,
        hop,
    })
}
