//! Numeric replies sent by the gateway.

use std::fmt;

/// IRC numeric reply codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Response {
    RPL_USERHOST,
    RPL_ISON,
    ERR_UNKNOWNCOMMAND,
}

impl Response {
    pub const fn code(self) -> u16 {
        match self {
            Self::RPL_USERHOST => 302,
            Self::RPL_ISON => 303,
            Self::ERR_UNKNOWNCOMMAND => 421,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
