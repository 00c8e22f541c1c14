// Copyright (c) 2014-2016 Robert Clipsham <robert@octarineparrot.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compile-time classification of the target platform.
//!
//! The target is reduced to a fixed set of boolean flags once, at build time. Targets that
//! cannot be classified do not build: an Apple target that is neither a simulator, an iPhone
//! nor a Mac is rejected, as is any target that matches no known OS family. The layouts of the
//! structures read by [`crate::lladdr`] depend on this classification.

use std::fmt;

#[cfg(all(
    target_vendor = "apple",
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "tvos",
        target_os = "watchos",
        target_os = "visionos"
    ))
))]
compile_error!("Unknown Apple platform");

#[cfg(not(any(
    windows,
    target_vendor = "apple",
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
compile_error!("Unknown compiler: the target platform could not be classified");

/// The raw target identification symbols the classifier decides on.
///
/// [`HOST_SYMBOLS`] is the value for the platform being compiled for. Other values only exist
/// to exercise [`classify`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TargetSymbols {
    pub windows: bool,
    /// 64-bit pointer width, only consulted for Windows.
    pub win64: bool,
    pub apple: bool,
    pub ios_simulator: bool,
    pub iphone: bool,
    pub mac: bool,
    /// Linux kernel, Android included.
    pub linux: bool,
    pub bsd: bool,
    pub unix: bool,
    pub posix: bool,
}

/// The resolved platform flags.
///
/// Flags are mutually informative rather than exclusive: `is_ios_simulator` implies `is_ios`,
/// and `is_unix`/`is_posix` are set alongside whichever OS family matched.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PlatformFlags {
    pub is_windows: bool,
    pub is_win32: bool,
    pub is_win64: bool,
    pub is_macos: bool,
    pub is_ios: bool,
    pub is_ios_simulator: bool,
    pub is_linux: bool,
    pub is_bsd: bool,
    pub is_unix: bool,
    pub is_posix: bool,
}

impl PlatformFlags {
    /// True for targets whose link-layer addresses are `sockaddr_dl` records.
    pub const fn is_bsd_family(&self) -> bool {
        self.is_macos || self.is_ios || self.is_bsd
    }
}

/// Reasons a target cannot be classified.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClassifyError {
    /// Apple target, but not a simulator, an iPhone or a Mac.
    UnknownApplePlatform,
    /// No OS family was recognized at all.
    UnknownPlatform,
}

impl ClassifyError {
    pub const fn message(&self) -> &'static str {
        match *self {
            ClassifyError::UnknownApplePlatform => "Unknown Apple platform",
            ClassifyError::UnknownPlatform => {
                "Unknown compiler: the target platform could not be classified"
            }
        }
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ClassifyError {}

/// Derive the platform flags from a set of target symbols.
///
/// The primary family is decided in priority order: Windows, Apple, Linux, BSD. Within Apple
/// the simulator wins over the iPhone, which wins over the Mac. `unix` and `posix` are copied
/// through independently.
pub const fn classify(sym: TargetSymbols) -> Result<PlatformFlags, ClassifyError> {
    let mut flags = PlatformFlags {
        is_windows: false,
        is_win32: false,
        is_win64: false,
        is_macos: false,
        is_ios: false,
        is_ios_simulator: false,
        is_linux: false,
        is_bsd: false,
        is_unix: false,
        is_posix: false,
    };

    if sym.windows {
        flags.is_windows = true;
        if sym.win64 {
            flags.is_win64 = true;
        } else {
            flags.is_win32 = true;
        }
    } else if sym.apple {
        if sym.ios_simulator {
            flags.is_ios = true;
            flags.is_ios_simulator = true;
        } else if sym.iphone {
            flags.is_ios = true;
        } else if sym.mac {
            flags.is_macos = true;
        } else {
            return Err(ClassifyError::UnknownApplePlatform);
        }
    } else if sym.linux {
        flags.is_linux = true;
    } else if sym.bsd {
        flags.is_bsd = true;
    }

    flags.is_unix = sym.unix;
    flags.is_posix = sym.posix;

    if !(flags.is_linux || flags.is_macos || flags.is_ios || flags.is_windows || flags.is_bsd) {
        return Err(ClassifyError::UnknownPlatform);
    }

    Ok(flags)
}

/// Target symbols of the platform being compiled for.
pub const HOST_SYMBOLS: TargetSymbols = TargetSymbols {
    windows: cfg!(windows),
    win64: cfg!(target_pointer_width = "64"),
    apple: cfg!(target_vendor = "apple"),
    // Mac Catalyst is an iOS target on x86_64 but runs natively.
    ios_simulator: cfg!(all(
        any(
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "visionos"
        ),
        any(
            target_abi = "sim",
            all(target_arch = "x86_64", not(target_abi = "macabi"))
        )
    )),
    iphone: cfg!(any(
        target_os = "ios",
        target_os = "tvos",
        target_os = "watchos",
        target_os = "visionos"
    )),
    mac: cfg!(target_os = "macos"),
    linux: cfg!(any(target_os = "linux", target_os = "android")),
    bsd: cfg!(any(
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    )),
    unix: cfg!(unix),
    posix: cfg!(unix),
};

/// Platform flags of the platform being compiled for. Evaluating this constant fails the build
/// on unclassifiable targets.
pub const HOST: PlatformFlags = match classify(HOST_SYMBOLS) {
    Ok(flags) => flags,
    Err(ClassifyError::UnknownApplePlatform) => panic!("Unknown Apple platform"),
    Err(ClassifyError::UnknownPlatform) => {
        panic!("Unknown compiler: the target platform could not be classified")
    }
};

pub const IS_WINDOWS: bool = HOST.is_windows;
pub const IS_WIN32: bool = HOST.is_win32;
pub const IS_WIN64: bool = HOST.is_win64;
pub const IS_MACOS: bool = HOST.is_macos;
pub const IS_IOS: bool = HOST.is_ios;
pub const IS_IOS_SIMULATOR: bool = HOST.is_ios_simulator;
pub const IS_LINUX: bool = HOST.is_linux;
pub const IS_BSD: bool = HOST.is_bsd;
pub const IS_UNIX: bool = HOST.is_unix;
pub const IS_POSIX: bool = HOST.is_posix;

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> PlatformFlags {
        PlatformFlags::default()
    }

    #[test]
    fn windows_32() {
        let sym = TargetSymbols {
            windows: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_windows: true,
            is_win32: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
    }

    #[test]
    fn windows_64() {
        let sym = TargetSymbols {
            windows: true,
            win64: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_windows: true,
            is_win64: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
    }

    #[test]
    fn windows_wins_over_everything() {
        let sym = TargetSymbols {
            windows: true,
            win64: true,
            apple: true,
            mac: true,
            linux: true,
            bsd: true,
            ..Default::default()
        };
        let out = classify(sym).unwrap();
        assert!(out.is_windows);
        assert!(!out.is_macos && !out.is_linux && !out.is_bsd);
    }

    #[test]
    fn macos() {
        let sym = TargetSymbols {
            apple: true,
            mac: true,
            unix: true,
            posix: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_macos: true,
            is_unix: true,
            is_posix: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
    }

    #[test]
    fn ios() {
        // TARGET_OS_MAC is also set on iOS; the iPhone discriminator takes precedence.
        let sym = TargetSymbols {
            apple: true,
            iphone: true,
            mac: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_ios: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
    }

    #[test]
    fn ios_simulator() {
        let sym = TargetSymbols {
            apple: true,
            ios_simulator: true,
            iphone: true,
            mac: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_ios: true,
            is_ios_simulator: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
    }

    #[test]
    fn linux() {
        let sym = TargetSymbols {
            linux: true,
            unix: true,
            posix: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_linux: true,
            is_unix: true,
            is_posix: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
    }

    #[test]
    fn linux_wins_over_bsd() {
        let sym = TargetSymbols {
            linux: true,
            bsd: true,
            ..Default::default()
        };
        let out = classify(sym).unwrap();
        assert!(out.is_linux);
        assert!(!out.is_bsd);
    }

    #[test]
    fn bsd() {
        let sym = TargetSymbols {
            bsd: true,
            unix: true,
            ..Default::default()
        };
        let expected = PlatformFlags {
            is_bsd: true,
            is_unix: true,
            ..flags()
        };
        assert_eq!(classify(sym), Ok(expected));
        assert!(expected.is_bsd_family());
    }

    #[test]
    fn unix_and_posix_alone_are_not_a_platform() {
        let sym = TargetSymbols {
            unix: true,
            posix: true,
            ..Default::default()
        };
        assert_eq!(classify(sym), Err(ClassifyError::UnknownPlatform));
    }

    #[test]
    fn unknown_apple_platform() {
        let sym = TargetSymbols {
            apple: true,
            unix: true,
            ..Default::default()
        };
        let err = classify(sym).unwrap_err();
        assert_eq!(err, ClassifyError::UnknownApplePlatform);
        assert_eq!(err.to_string(), "Unknown Apple platform");
    }

    #[test]
    fn unknown_platform() {
        assert_eq!(
            classify(TargetSymbols::default()),
            Err(ClassifyError::UnknownPlatform)
        );
    }

    #[test]
    fn host_matches_cfg() {
        assert_eq!(classify(HOST_SYMBOLS), Ok(HOST));
        assert_eq!(IS_LINUX, cfg!(any(target_os = "linux", target_os = "android")));
        assert_eq!(IS_MACOS, cfg!(target_os = "macos"));
        assert_eq!(IS_WINDOWS, cfg!(windows));
        assert_eq!(IS_UNIX, cfg!(unix));
        assert_eq!(IS_POSIX, cfg!(unix));
        assert!(!(IS_WIN32 && IS_WIN64));
        assert!(!IS_IOS_SIMULATOR || IS_IOS);
        assert_eq!(HOST.is_bsd_family(), IS_MACOS || IS_IOS || IS_BSD);
    }

    #[test]
    fn apple_mobile_targets_are_ios() {
        let mobile = cfg!(any(
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "visionos"
        ));
        assert_eq!(IS_IOS, mobile);
        assert!(!(IS_IOS && IS_MACOS));
    }

    #[cfg(target_abi = "macabi")]
    const _: () = assert!(IS_IOS && !IS_IOS_SIMULATOR);

    #[test]
    fn catalyst_is_not_a_simulator() {
        if cfg!(target_abi = "macabi") {
            assert!(IS_IOS);
            assert!(!IS_IOS_SIMULATOR);
        }
        if cfg!(target_abi = "sim") {
            assert!(IS_IOS_SIMULATOR);
        }
    }
}
