//! Network prefix parsing and normalization.
//!
//! Provides [`NormalizedPrefix`] for representing IPv4 or IPv6 networks in
//! CIDR notation, along with the bit-mask helpers used to clear host bits.

use crate::error::ParseError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;
/// Leading bits of an IPv4-mapped IPv6 address (`::ffff:0:0/96`).
const IPV4_MAPPED_BITS: u8 = MAX_LENGTH_V6 - MAX_LENGTH_V4;

/// Regex for `<address>/<prefix-length>`.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<address>[^/\s]+)/(?P<length>[0-9]+)$").expect("Invalid Regex")
    })
}

/// Address family of a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    /// Detect the family from the textual form of an address.
    ///
    /// Anything containing a colon is IPv6, everything else is treated as
    /// dotted-decimal IPv4.
    pub fn detect(address: &str) -> Family {
        if address.contains(':') {
            Family::Ipv6
        } else {
            Family::Ipv4
        }
    }

    pub fn max_length(&self) -> u8 {
        match self {
            Family::Ipv4 => MAX_LENGTH_V4,
            Family::Ipv6 => MAX_LENGTH_V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Ipv4 => write!(f, "IPv4"),
            Family::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// Convert a prefix length to a network mask, right-aligned in a u128.
///
/// IPv4 masks occupy the low 32 bits.
///
/// # Examples
/// ```
/// use netoverlap::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(24, Family::Ipv4).unwrap(), 0xFFFF_FF00);
/// ```
pub fn get_cidr_mask(len: u8, family: Family) -> Result<u128, ParseError> {
    let max = family.max_length();
    if len > max {
        return Err(ParseError::PrefixLength {
            length: len.to_string(),
            family,
            max,
        });
    }
    let right_len = u32::from(max - len);
    let all_bits = u128::MAX >> (128 - u32::from(max));

    // A shift by the full 128 bits is an overflow, and means an empty mask.
    let mask = all_bits
        .checked_shr(right_len)
        .and_then(|bits| bits.checked_shl(right_len))
        .unwrap_or(0);

    Ok(mask)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: IpAddr, len: u8) -> Result<IpAddr, ParseError> {
    match addr {
        IpAddr::V4(v4) => {
            let mask = get_cidr_mask(len, Family::Ipv4)? as u32;
            Ok(IpAddr::V4(Ipv4Addr::from(u32::from(v4) & mask)))
        }
        IpAddr::V6(v6) => {
            let mask = get_cidr_mask(len, Family::Ipv6)?;
            Ok(IpAddr::V6(Ipv6Addr::from(u128::from(v6) & mask)))
        }
    }
}

/// Parse a CIDR string into a [`NormalizedPrefix`].
///
/// Host bits are cleared, so `10.0.2.10/20` yields `10.0.0.0/20`.
pub fn parse(input: &str) -> Result<NormalizedPrefix, ParseError> {
    let caps = get_cidr_regex()
        .captures(input)
        .ok_or_else(|| ParseError::Syntax(input.to_string()))?;
    let address = &caps["address"];
    let length = &caps["length"];

    let family = Family::detect(address);
    let addr = match family {
        Family::Ipv4 => address.parse::<Ipv4Addr>().map(IpAddr::V4),
        Family::Ipv6 => address.parse::<Ipv6Addr>().map(IpAddr::V6),
    }
    .map_err(|_| ParseError::Address {
        address: address.to_string(),
        family,
    })?;

    // Digits only, so a failed parse can only mean the value is too large.
    let max = family.max_length();
    let prefix_length = length
        .parse::<u8>()
        .ok()
        .filter(|len| *len <= max)
        .ok_or_else(|| ParseError::PrefixLength {
            length: length.to_string(),
            family,
            max,
        })?;

    let network = cut_addr(addr, prefix_length)?;
    let prefix = NormalizedPrefix::from_network(network, prefix_length);
    log::debug!("parse({input}) normalized to {prefix} ({})", prefix.family);

    Ok(prefix)
}

/// A network prefix with all host bits cleared.
///
/// Values are only built through [`parse`] and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPrefix {
    address: IpAddr,
    prefix_length: u8,
    family: Family,
}

impl NormalizedPrefix {
    /// Create a new [`NormalizedPrefix`] from a CIDR string (e.g. "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<NormalizedPrefix, ParseError> {
        parse(addr_cidr)
    }

    /// `network` must already be masked to `prefix_length`.
    fn from_network(network: IpAddr, prefix_length: u8) -> NormalizedPrefix {
        // An IPv4-mapped network renders dotted, so it joins the IPv4 family
        // and is stored at IPv4 width.
        let (address, prefix_length) = match network {
            IpAddr::V6(v6) if prefix_length >= IPV4_MAPPED_BITS => match v6.to_ipv4_mapped() {
                Some(v4) => (IpAddr::V4(v4), prefix_length - IPV4_MAPPED_BITS),
                None => (network, prefix_length),
            },
            _ => (network, prefix_length),
        };
        let family = Family::detect(&address.to_string());

        NormalizedPrefix {
            address,
            prefix_length,
            family,
        }
    }

    /// The network address (lowest address of the prefix).
    pub fn network_address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Network address as fixed-width bytes: 4 for IPv4, 16 for IPv6.
    pub fn octets(&self) -> Vec<u8> {
        match self.address {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// Check if an IP address falls within this network.
    ///
    /// Addresses of the other family are never contained.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.address, ip) {
            (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)) => {
                cut_addr(ip, self.prefix_length).is_ok_and(|network| network == self.address)
            }
            _ => false,
        }
    }
}

impl FromStr for NormalizedPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for NormalizedPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl Serialize for NormalizedPrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NormalizedPrefix {
    fn deserialize<D>(deserializer: D) -> Result<NormalizedPrefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }
}
