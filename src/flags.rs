// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use bitflags::bitflags;

bitflags! {
    /// The state of an interface, as returned by `SIOCGIFFLAGS` and in `ifa_flags`.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct InterfaceFlags: u32 {
        /// Interface is up.
        const IFF_UP = 0x1;
        /// Broadcast address valid.
        const IFF_BROADCAST = 0x2;
        /// Turn on debugging.
        const IFF_DEBUG = 0x4;
        /// Is a loopback net.
        const IFF_LOOPBACK = 0x8;
        /// Interface is point-to-point link.
        const IFF_POINTOPOINT = 0x10;
        /// Avoid use of trailers.
        const IFF_NOTRAILERS = 0x20;
        /// Resources allocated.
        const IFF_RUNNING = 0x40;
        /// No address resolution protocol.
        const IFF_NOARP = 0x80;
        /// Receive all packets.
        const IFF_PROMISC = 0x100;
        /// Receive all multicast packets.
        const IFF_ALLMULTI = 0x200;
        /// Master of a load balancer.
        const IFF_MASTER = 0x400;
        /// Slave of a load balancer.
        const IFF_SLAVE = 0x800;
        /// Supports multicast.
        const IFF_MULTICAST = 0x1000;
        /// Can set media type.
        const IFF_PORTSEL = 0x2000;
        /// Auto media select active.
        const IFF_AUTOMEDIA = 0x4000;
        /// Dialup device with changing addresses.
        const IFF_DYNAMIC = 0x8000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn common_bits_match_libc() {
        assert_eq!(InterfaceFlags::IFF_UP.bits(), libc::IFF_UP as u32);
        assert_eq!(InterfaceFlags::IFF_BROADCAST.bits(), libc::IFF_BROADCAST as u32);
        assert_eq!(InterfaceFlags::IFF_LOOPBACK.bits(), libc::IFF_LOOPBACK as u32);
        assert_eq!(InterfaceFlags::IFF_POINTOPOINT.bits(), libc::IFF_POINTOPOINT as u32);
        assert_eq!(InterfaceFlags::IFF_RUNNING.bits(), libc::IFF_RUNNING as u32);
        assert_eq!(InterfaceFlags::IFF_PROMISC.bits(), libc::IFF_PROMISC as u32);
    }

    #[test]
    fn unknown_bits_are_truncated() {
        let flags = InterfaceFlags::from_bits_truncate(0x1_0043);
        assert_eq!(
            flags,
            InterfaceFlags::IFF_UP | InterfaceFlags::IFF_BROADCAST | InterfaceFlags::IFF_RUNNING
        );
    }
}
