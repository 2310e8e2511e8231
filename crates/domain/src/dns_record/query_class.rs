use std::fmt;

/// Question class (RFC 1035 §3.2.4). Almost always `IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    IN,
    CH,
    HS,
    NONE,
    ANY,
    Unknown(u16),
}

impl QueryClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            QueryClass::IN => 1,
            QueryClass::CH => 3,
            QueryClass::HS => 4,
            QueryClass::NONE => 254,
            QueryClass::ANY => 255,
            QueryClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => QueryClass::IN,
            3 => QueryClass::CH,
            4 => QueryClass::HS,
            254 => QueryClass::NONE,
            255 => QueryClass::ANY,
            other => QueryClass::Unknown(other),
        }
    }
}

impl From<u16> for QueryClass {
    fn from(code: u16) -> Self {
        Self::from_u16(code)
    }
}

impl From<QueryClass> for u16 {
    fn from(class: QueryClass) -> Self {
        class.to_u16()
    }
}

impl fmt::Display for QueryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryClass::IN => f.write_str("IN"),
            QueryClass::CH => f.write_str("CH"),
            QueryClass::HS => f.write_str("HS"),
            QueryClass::NONE => f.write_str("NONE"),
            QueryClass::ANY => f.write_str("ANY"),
            QueryClass::Unknown(code) => write!(f, "CLASS{}", code),
        }
    }
}
