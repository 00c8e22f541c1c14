// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints interfaces roughly the way `ifconfig` does

extern crate interfaces;

#[cfg(unix)]
mod unix {
    use clap::Parser;

    use interfaces::{platform, Interface, InterfaceFlags, Kind};

    // Flag mappings that ifconfig uses, in order.
    const NAME_MAPPINGS: &[(InterfaceFlags, &str)] = &[
        (InterfaceFlags::IFF_UP, "UP"),
        (InterfaceFlags::IFF_LOOPBACK, "LOOPBACK"),
        (InterfaceFlags::IFF_BROADCAST, "BROADCAST"),
        (InterfaceFlags::IFF_RUNNING, "RUNNING"),
        (InterfaceFlags::IFF_MULTICAST, "MULTICAST"),
    ];

    #[derive(Parser, Debug)]
    #[command(about = "Print the interfaces of this system")]
    struct Args {
        /// Only show this interface
        interface: Option<String>,
    }

    pub fn main() {
        env_logger::init();
        let args = Args::parse();

        let mut ifs = match args.interface {
            Some(ref name) => match Interface::get_by_name(name) {
                Ok(Some(i)) => vec![i],
                Ok(None) => {
                    eprintln!("Could not find an interface named: {}", name);
                    return;
                }
                Err(e) => {
                    eprintln!("An error occurred fetching interfaces: {}", e);
                    return;
                }
            },
            None => Interface::get_all().expect("could not get interfaces"),
        };
        ifs.sort_by(|a, b| a.name.cmp(&b.name));

        let max_align = ifs.iter().map(|i| i.name.len() + 2).max().unwrap_or(2);
        let full_align = " ".repeat(max_align);

        for i in ifs.iter() {
            let name_align = " ".repeat(max_align - i.name.len() - 2);

            let flag_strs: Vec<&str> = NAME_MAPPINGS
                .iter()
                .filter(|&&(f, _)| i.flags.contains(f))
                .map(|&(_, s)| s)
                .collect();

            println!(
                "{}: {}flags={} <{}> mtu {}",
                i.name,
                name_align,
                i.flags.bits(),
                flag_strs.join(","),
                i.get_mtu().unwrap_or(0)
            );

            if !i.is_loopback() {
                if let Ok(addr) = i.hardware_addr() {
                    println!("{}ether {}", full_align, addr);
                }
            }

            for addr in i.addresses.iter() {
                let raddr = match addr.addr {
                    Some(a) => a,
                    None => continue,
                };

                let prefix = match addr.kind {
                    Kind::Ipv4 => "inet",
                    Kind::Ipv6 => "inet6",
                    _ => continue,
                };

                println!("{}{} {}", full_align, prefix, raddr.ip());
            }
        }

        log::debug!("platform flags: {:?}", platform::HOST);
    }
}

#[cfg(unix)]
fn main() {
    unix::main()
}

#[cfg(not(unix))]
fn main() {
    eprintln!("Listing interfaces is only supported on Unix systems");
}
