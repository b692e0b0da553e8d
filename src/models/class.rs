//! Classful network categories.

use serde::{Deserialize, Serialize};

/// Historic address class, a pure function of the first octet.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NetworkClass {
    /// 0-127
    A,
    /// 128-191
    B,
    /// 192-223
    C,
    /// 224-239, multicast.
    D,
    /// 240-255, reserved.
    E,
}

impl NetworkClass {
    /// Look up the class of an address by its first octet.
    pub fn from_first_octet(first_octet: u8) -> NetworkClass {
        match first_octet {
            0..=127 => NetworkClass::A,
            128..=191 => NetworkClass::B,
            192..=223 => NetworkClass::C,
            224..=239 => NetworkClass::D,
            _ => NetworkClass::E,
        }
    }

    /// Single letter name, "A" to "E".
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
            NetworkClass::D => "D",
            NetworkClass::E => "E",
        }
    }
}

impl std::fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
