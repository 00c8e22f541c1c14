// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Brings an interface up or down. Usually needs root.

extern crate interfaces;

#[cfg(unix)]
mod unix {
    use std::process::exit;

    use clap::{Parser, ValueEnum};

    use interfaces::Interface;

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Status {
        Up,
        Down,
    }

    #[derive(Parser, Debug)]
    #[command(about = "Set the status of an interface")]
    struct Args {
        /// New status of the interface
        #[arg(value_enum)]
        status: Status,

        /// Name of the interface
        interface: String,
    }

    fn up_down(up: bool) -> &'static str {
        if up {
            "up"
        } else {
            "down"
        }
    }

    pub fn main() {
        env_logger::init();
        let args = Args::parse();
        let new_status = matches!(args.status, Status::Up);

        let mut i = match Interface::get_by_name(&args.interface) {
            Ok(Some(i)) => i,
            Ok(None) => {
                eprintln!("Could not find an interface named: {}", args.interface);
                exit(1);
            }
            Err(e) => {
                eprintln!("An error occurred fetching interfaces: {}", e);
                exit(1);
            }
        };

        println!("Interface {} was {}", i.name, up_down(i.is_up()));
        match i.set_up(new_status) {
            Ok(()) => {
                println!("Successfully set interface status");
                println!("Interface is now {}", up_down(i.is_up()));
            }
            Err(e) => {
                eprintln!("Could not set interface status: {}", e);
                exit(1);
            }
        }
    }
}

#[cfg(unix)]
fn main() {
    unix::main()
}

#[cfg(not(unix))]
fn main() {
    eprintln!("Changing interface status is only supported on Unix systems");
}
