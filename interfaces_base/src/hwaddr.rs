// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The number of octets in an Ethernet hardware address.
pub const HARDWARE_ADDR_LEN: usize = 6;

const LOCAL_ADDR_BIT: u8 = 0x02;
const MULTICAST_ADDR_BIT: u8 = 0x01;

/// HardwareAddr represents a hardware address (commonly known as a MAC address) of a given
/// interface.
#[derive(PartialEq, Eq, Clone, Copy, Default, Hash, Ord, PartialOrd)]
pub struct HardwareAddr([u8; HARDWARE_ADDR_LEN]);

impl HardwareAddr {
    /// Construct a new `HardwareAddr` from its six octets.
    pub const fn new(octets: [u8; HARDWARE_ADDR_LEN]) -> HardwareAddr {
        HardwareAddr(octets)
    }

    /// Returns a new, empty `HardwareAddr` structure. This is equivalent to the MAC address
    /// `00:00:00:00:00:00`.
    pub const fn zero() -> HardwareAddr {
        HardwareAddr([0; HARDWARE_ADDR_LEN])
    }

    /// The broadcast address, `ff:ff:ff:ff:ff:ff`.
    pub const fn broadcast() -> HardwareAddr {
        HardwareAddr([0xff; HARDWARE_ADDR_LEN])
    }

    /// Copies the first six octets out of `bytes`. Returns `None` if `bytes` is shorter than
    /// an Ethernet address.
    pub fn from_slice(bytes: &[u8]) -> Option<HardwareAddr> {
        let octets: [u8; HARDWARE_ADDR_LEN] = bytes.get(..HARDWARE_ADDR_LEN)?.try_into().ok()?;
        Some(HardwareAddr(octets))
    }

    /// Formats this hardware address in the standard MAC address format - 6 octets in
    /// hexadecimal, each separated by a colon.
    ///
    /// ```
    /// # use interfaces_base::HardwareAddr;
    /// let s = HardwareAddr::zero().as_string();
    /// assert_eq!(s, "00:00:00:00:00:00");
    /// ```
    pub fn as_string(&self) -> String {
        format!("{}", self)
    }

    /// Formats this hardware address as a sequence of hexadecimal numbers without the
    /// separating colons.
    ///
    /// ```
    /// # use interfaces_base::HardwareAddr;
    /// let s = HardwareAddr::new([0x02, 0x11, 0x22, 0x33, 0x44, 0x55]).as_bare_string();
    /// assert_eq!(s, "021122334455");
    /// ```
    pub fn as_bare_string(&self) -> String {
        let a = &self.0;
        format!(
            "{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            a[0], a[1], a[2], a[3], a[4], a[5]
        )
    }

    /// Returns the raw octets of this hardware address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the octets by value.
    pub const fn octets(&self) -> [u8; HARDWARE_ADDR_LEN] {
        self.0
    }

    /// Returns true if this is the all-zero address.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns true if the address is locally administered (LAA).
    pub fn is_local(&self) -> bool {
        (self.0[0] & LOCAL_ADDR_BIT) == LOCAL_ADDR_BIT
    }

    /// Returns true if the address is universally administered (UAA).
    pub fn is_universal(&self) -> bool {
        !self.is_local()
    }

    /// Returns true if the address is a multicast address.
    pub fn is_multicast(&self) -> bool {
        (self.0[0] & MULTICAST_ADDR_BIT) == MULTICAST_ADDR_BIT
    }

    /// Returns true if the address is a unicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Returns true if this is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::broadcast()
    }
}

impl From<[u8; HARDWARE_ADDR_LEN]> for HardwareAddr {
    fn from(octets: [u8; HARDWARE_ADDR_LEN]) -> HardwareAddr {
        HardwareAddr(octets)
    }
}

impl From<HardwareAddr> for [u8; HARDWARE_ADDR_LEN] {
    fn from(addr: HardwareAddr) -> Self {
        addr.0
    }
}

impl PartialEq<[u8; HARDWARE_ADDR_LEN]> for HardwareAddr {
    fn eq(&self, other: &[u8; HARDWARE_ADDR_LEN]) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let a = &self.0;
        write!(
            fmt,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a[0], a[1], a[2], a[3], a[4], a[5]
        )
    }
}

impl fmt::Debug for HardwareAddr {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

#[cfg(feature = "serde")]
impl Serialize for HardwareAddr {
    /// Serializes to the colon separated string when the format is human readable, and to
    /// the six raw octets otherwise.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.as_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HardwareAddr {
    /// Accepts either a string or a 6-byte array. Self-describing formats are auto-detected,
    /// otherwise the human-readable property of the deserializer decides.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HardwareAddrVisitor;
        impl<'de> de::Visitor<'de> for HardwareAddrVisitor {
            type Value = HardwareAddr;

            fn visit_str<E: de::Error>(self, value: &str) -> Result<HardwareAddr, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<HardwareAddr, E> {
                match HardwareAddr::from_slice(v) {
                    Some(addr) if v.len() == HARDWARE_ADDR_LEN => Ok(addr),
                    _ => Err(E::invalid_length(v.len(), &self)),
                }
            }

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "either a string representation of a hardware address or 6-element byte array"
                )
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(HardwareAddrVisitor)
        } else {
            deserializer.deserialize_bytes(HardwareAddrVisitor)
        }
    }
}

/// Represents an error which occurred whilst parsing a hardware address.
#[derive(Copy, Debug, PartialEq, Eq, Clone)]
pub enum ParseHardwareAddrErr {
    /// The address has too many components, eg. 00:11:22:33:44:55:66.
    TooManyComponents,
    /// The address has too few components, eg. 00:11.
    TooFewComponents,
    /// One of the components contains an invalid value, eg. 00:GG:22:33:44:55.
    InvalidComponent,
}

#[cfg(feature = "std")]
impl std::error::Error for ParseHardwareAddrErr {}

impl ParseHardwareAddrErr {
    fn description(&self) -> &str {
        match *self {
            ParseHardwareAddrErr::TooManyComponents => {
                "Too many components in a hardware address string"
            }
            ParseHardwareAddrErr::TooFewComponents => {
                "Too few components in a hardware address string"
            }
            ParseHardwareAddrErr::InvalidComponent => {
                "Invalid component in a hardware address string"
            }
        }
    }
}

impl fmt::Display for ParseHardwareAddrErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for HardwareAddr {
    type Err = ParseHardwareAddrErr;
    fn from_str(s: &str) -> Result<HardwareAddr, ParseHardwareAddrErr> {
        let mut parts = [0u8; HARDWARE_ADDR_LEN];
        let mut i = 0;
        for split in s.split(':') {
            if i == HARDWARE_ADDR_LEN {
                return Err(ParseHardwareAddrErr::TooManyComponents);
            }
            match u8::from_str_radix(split, 16) {
                Ok(b) if !split.is_empty() && split.len() <= 2 => parts[i] = b,
                _ => return Err(ParseHardwareAddrErr::InvalidComponent),
            }
            i += 1;
        }

        if i == HARDWARE_ADDR_LEN {
            Ok(HardwareAddr(parts))
        } else {
            Err(ParseHardwareAddrErr::TooFewComponents)
        }
    }
}
