use bitflags::bitflags;

bitflags! {
    /// Comparison sense of a versioned dependency, using the same bit values as RPM's `RPMSENSE_*`.
    #[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
    pub struct DependencyFlags: u32 {
        const ANY = 0;
        const LESS = 1 << 1;
        const GREATER = 1 << 2;
        const EQUAL = 1 << 3;

        const LE = Self::LESS.bits() | Self::EQUAL.bits();
        const GE = Self::GREATER.bits() | Self::EQUAL.bits();
    }
}

impl DependencyFlags {
    /// The operator written between a dependency name and its version, if any
    pub fn operator(&self) -> Option<&'static str> {
        let sense = *self & (Self::LESS | Self::GREATER | Self::EQUAL);
        match sense {
            s if s == Self::LESS => Some("<"),
            s if s == Self::LE => Some("<="),
            s if s == Self::EQUAL => Some("="),
            s if s == Self::GE => Some(">="),
            s if s == Self::GREATER => Some(">"),
            _ => None,
        }
    }

    /// Map a textual comparison operator back to its sense flags
    pub fn from_operator(op: &str) -> Option<Self> {
        match op {
            "<" => Some(Self::LESS),
            "<=" => Some(Self::LE),
            "=" | "==" => Some(Self::EQUAL),
            ">=" => Some(Self::GE),
            ">" => Some(Self::GREATER),
            _ => None,
        }
    }
}
