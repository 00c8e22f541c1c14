// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ffi::CStr;
use std::io;
use std::marker::PhantomData;
use std::mem;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::ptr;

use crate::bindings::{ifreq, IoctlRequest};

pub type CSocket = libc::c_int;

/// An owned file descriptor, closed on drop.
#[derive(Debug)]
pub struct FileDesc {
    pub fd: CSocket,
}

impl FileDesc {
    /// Open an `AF_INET` datagram socket. It is never bound; it only serves as a handle for
    /// interface ioctls.
    pub fn control_socket() -> io::Result<FileDesc> {
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
        if fd < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(FileDesc { fd })
        }
    }

    /// Issue an interface ioctl, retrying on `EINTR`.
    pub fn ioctl(&self, request: IoctlRequest, req: &mut ifreq) -> io::Result<()> {
        let req = req as *mut ifreq;
        let ret = retry(&mut || unsafe { libc::ioctl(self.fd, request, req) });
        if ret < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

impl Drop for FileDesc {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

#[inline]
fn retry<F>(f: &mut F) -> libc::c_int
where
    F: FnMut() -> libc::c_int,
{
    loop {
        let ret = f();
        if ret != -1 || io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
            return ret;
        }
    }
}

/// The list of interface addresses returned by `getifaddrs`, freed on drop.
pub struct IfAddrs {
    head: *mut libc::ifaddrs,
}

impl IfAddrs {
    pub fn new() -> io::Result<IfAddrs> {
        let mut head: *mut libc::ifaddrs = ptr::null_mut();
        if unsafe { libc::getifaddrs(&mut head) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(IfAddrs { head })
    }

    pub fn iter(&self) -> IfAddrsIter<'_> {
        IfAddrsIter {
            cur: self.head,
            _list: PhantomData,
        }
    }
}

impl Drop for IfAddrs {
    fn drop(&mut self) {
        let head = mem::replace(&mut self.head, ptr::null_mut());
        if !head.is_null() {
            unsafe { libc::freeifaddrs(head) };
        }
    }
}

impl<'a> IntoIterator for &'a IfAddrs {
    type Item = &'a libc::ifaddrs;
    type IntoIter = IfAddrsIter<'a>;

    fn into_iter(self) -> IfAddrsIter<'a> {
        self.iter()
    }
}

/// Walks the records of an [`IfAddrs`] list.
pub struct IfAddrsIter<'a> {
    cur: *mut libc::ifaddrs,
    _list: PhantomData<&'a IfAddrs>,
}

impl<'a> Iterator for IfAddrsIter<'a> {
    type Item = &'a libc::ifaddrs;

    fn next(&mut self) -> Option<&'a libc::ifaddrs> {
        if self.cur.is_null() {
            return None;
        }
        let ifa = unsafe { &*self.cur };
        self.cur = ifa.ifa_next;
        Some(ifa)
    }
}

/// The name of an `ifaddrs` record, if it is valid UTF-8.
pub fn ifaddr_name(ifa: &libc::ifaddrs) -> Option<&str> {
    if ifa.ifa_name.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ifa.ifa_name) }.to_str().ok()
}

/// The broadcast or point-to-point destination address field of a record. Which of the two
/// it holds is told by `IFF_BROADCAST`.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn ifaddr_next_hop(ifa: &libc::ifaddrs) -> *const libc::sockaddr {
    ifa.ifa_ifu
}

/// The broadcast or point-to-point destination address field of a record. Which of the two
/// it holds is told by `IFF_BROADCAST`.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn ifaddr_next_hop(ifa: &libc::ifaddrs) -> *const libc::sockaddr {
    ifa.ifa_dstaddr
}

/// Convert an IPv4 or IPv6 `sockaddr` to a `SocketAddr`.
///
/// Returns `None` for a null pointer and for every other address family.
///
/// # Safety
///
/// `sa` must be null or point to a socket address that is at least as large as its family
/// requires.
pub unsafe fn sockaddr_to_addr(sa: *const libc::sockaddr) -> Option<SocketAddr> {
    if sa.is_null() {
        return None;
    }
    match (*sa).sa_family as libc::c_int {
        libc::AF_INET => {
            let sin = &*(sa as *const libc::sockaddr_in);
            let ip = Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr));
            Some(SocketAddr::V4(SocketAddrV4::new(ip, u16::from_be(sin.sin_port))))
        }
        libc::AF_INET6 => {
            let sin6 = &*(sa as *const libc::sockaddr_in6);
            let ip = Ipv6Addr::from(sin6.sin6_addr.s6_addr);
            Some(SocketAddr::V6(SocketAddrV6::new(
                ip,
                u16::from_be(sin6.sin6_port),
                u32::from_be(sin6.sin6_flowinfo),
                sin6.sin6_scope_id,
            )))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sockaddr_v4() {
        let mut sin: libc::sockaddr_in = unsafe { mem::zeroed() };
        sin.sin_family = libc::AF_INET as libc::sa_family_t;
        sin.sin_port = 8080u16.to_be();
        sin.sin_addr.s_addr = u32::from(Ipv4Addr::new(192, 168, 1, 20)).to_be();

        let addr = unsafe { sockaddr_to_addr(&sin as *const _ as *const libc::sockaddr) };
        assert_eq!(addr, Some("192.168.1.20:8080".parse().unwrap()));
    }

    #[test]
    fn sockaddr_v6() {
        let mut sin6: libc::sockaddr_in6 = unsafe { mem::zeroed() };
        sin6.sin6_family = libc::AF_INET6 as libc::sa_family_t;
        sin6.sin6_port = 53u16.to_be();
        sin6.sin6_addr.s6_addr = "fe80::1".parse::<Ipv6Addr>().unwrap().octets();
        sin6.sin6_scope_id = 2;

        let addr = unsafe { sockaddr_to_addr(&sin6 as *const _ as *const libc::sockaddr) };
        let expected = SocketAddrV6::new("fe80::1".parse().unwrap(), 53, 0, 2);
        assert_eq!(addr, Some(SocketAddr::V6(expected)));
    }

    #[test]
    fn sockaddr_other_family() {
        assert_eq!(unsafe { sockaddr_to_addr(ptr::null()) }, None);

        let mut storage: libc::sockaddr_storage = unsafe { mem::zeroed() };
        storage.ss_family = libc::AF_UNIX as libc::sa_family_t;
        let sa = &storage as *const _ as *const libc::sockaddr;
        assert_eq!(unsafe { sockaddr_to_addr(sa) }, None);
    }

    #[test]
    fn getifaddrs_list() {
        let list = IfAddrs::new().unwrap();
        for ifa in &list {
            // Every record carries a name, the address may be absent.
            assert!(!ifa.ifa_name.is_null());
            let _ = ifaddr_name(ifa);
        }
    }

    #[test]
    fn control_socket_closes() {
        let sock = FileDesc::control_socket().unwrap();
        assert!(sock.fd >= 0);
    }
}
