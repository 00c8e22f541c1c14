// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This example simply prints all interfaces and their addresses to stdout

extern crate interfaces;

#[cfg(unix)]
mod unix {
    use interfaces::Interface;

    pub fn main() {
        env_logger::init();

        let mut ifs = Interface::get_all().expect("could not get interfaces");
        ifs.sort_by(|a, b| a.name.cmp(&b.name));

        for i in ifs.iter() {
            println!("{}:", i.name);
            println!("----------");
            println!("Flags: {:?}", i.flags);

            println!("Addresses:");
            for addr in i.addresses.iter() {
                match addr.network() {
                    Some(net) => println!("- {} - {}", addr.kind, net),
                    None => println!("- {} - {:?}", addr.kind, addr.addr),
                }
            }
            println!();
        }

        println!("There are {} interfaces on the system", ifs.len());
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
