// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::net::SocketAddr;

use ipnetwork::{ip_mask_to_prefix, IpNetwork};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `Kind` represents the interface family (the `sa_family` field of a `sockaddr`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Kind {
    /// This interface is IPv4.
    Ipv4,
    /// This interface is IPv6.
    Ipv6,
    /// BSD and Apple: a link-layer entry (`AF_LINK`).
    Link,
    /// Linux only: a packet (link-layer) entry (`AF_PACKET`).
    Packet,
    /// This interface has an unknown interface type. The interior `i32` is the numerical
    /// family.
    Unknown(i32),
}

impl Kind {
    /// Map an address family number to a `Kind`.
    pub fn from_family(family: i32) -> Kind {
        match family {
            libc::AF_INET => Kind::Ipv4,
            libc::AF_INET6 => Kind::Ipv6,
            #[cfg(any(target_os = "linux", target_os = "android"))]
            interfaces_sys::bindings::AF_PACKET => Kind::Packet,
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
            interfaces_sys::bindings::AF_LINK => Kind::Link,
            val => Kind::Unknown(val),
        }
    }

    /// True for the entry that carries the hardware address on this platform.
    pub fn is_link_layer(&self) -> bool {
        matches!(*self, Kind::Link | Kind::Packet)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::Ipv4 => write!(f, "IPv4"),
            Kind::Ipv6 => write!(f, "IPv6"),
            Kind::Link => write!(f, "Link"),
            Kind::Packet => write!(f, "Packet"),
            Kind::Unknown(v) => write!(f, "Unknown({})", v),
        }
    }
}

/// The next hop for an interface address.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum NextHop {
    /// The broadcast address associated with the interface's address.
    Broadcast(SocketAddr),
    /// The destination address of a point-to-point interface.
    Destination(SocketAddr),
}

impl NextHop {
    /// The address, whichever role it plays.
    pub fn addr(&self) -> SocketAddr {
        match *self {
            NextHop::Broadcast(addr) | NextHop::Destination(addr) => addr,
        }
    }
}

impl fmt::Display for NextHop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NextHop::Broadcast(ref addr) => write!(f, "Broadcast({})", addr),
            NextHop::Destination(ref addr) => write!(f, "Destination({})", addr),
        }
    }
}

/// A single address of an interface.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Address {
    /// The kind of address this is (e.g. IPv4).
    pub kind: Kind,
    /// The underlying socket address, if it applies.
    pub addr: Option<SocketAddr>,
    /// The netmask of this address, if it applies.
    pub mask: Option<SocketAddr>,
    /// The broadcast address or destination address, if it applies.
    pub hop: Option<NextHop>,
}

impl Address {
    /// The IP network this address belongs to, with the prefix length taken from the netmask.
    ///
    /// Returns `None` for non-IP addresses. A missing or non-contiguous netmask gives a prefix
    /// of 0.
    pub fn network(&self) -> Option<IpNetwork> {
        let ip = self.addr?.ip();
        let prefix = self
            .mask
            .and_then(|mask| ip_mask_to_prefix(mask.ip()).ok())
            .unwrap_or(0);
        IpNetwork::new(ip, prefix).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_family() {
        assert_eq!(Kind::from_family(libc::AF_INET), Kind::Ipv4);
        assert_eq!(Kind::from_family(libc::AF_INET6), Kind::Ipv6);
        assert_eq!(Kind::from_family(9999), Kind::Unknown(9999));
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    #[test]
    fn kind_packet() {
        let kind = Kind::from_family(libc::AF_PACKET);
        assert_eq!(kind, Kind::Packet);
        assert!(kind.is_link_layer());
    }

    #[cfg(any(target_os = "macos", target_os = "ios", target_os = "tvos", target_os = "watchos", target_os = "visionos", target_os = "freebsd"))]
    #[test]
    fn kind_link() {
        let kind = Kind::from_family(libc::AF_LINK);
        assert_eq!(kind, Kind::Link);
        assert!(kind.is_link_layer());
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Ipv4.to_string(), "IPv4");
        assert_eq!(Kind::Ipv6.to_string(), "IPv6");
        assert_eq!(Kind::Unknown(42).to_string(), "Unknown(42)");
    }

    #[test]
    fn next_hop_display() {
        let addr: SocketAddr = "10.0.0.255:0".parse().unwrap();
        assert_eq!(NextHop::Broadcast(addr).to_string(), "Broadcast(10.0.0.255:0)");
        assert_eq!(NextHop::Destination(addr).addr(), addr);
    }

    #[test]
    fn address_network() {
        let addr = Address {
            kind: Kind::Ipv4,
            addr: Some("10.1.2.3:0".parse().unwrap()),
            mask: Some("255.255.255.0:0".parse().unwrap()),
            hop: None,
        };
        assert_eq!(addr.network(), Some("10.1.2.3/24".parse().unwrap()));

        let addr = Address {
            mask: None,
            ..addr
        };
        assert_eq!(addr.network().map(|n| n.prefix()), Some(0));

        let link = Address {
            kind: Kind::Link,
            addr: None,
            mask: None,
            hop: None,
        };
        assert_eq!(link.network(), None);
    }
}
