/// Bit assigned to each condition flag in the serialized PSW byte.
const PSW_SIGN: u8 = 0x80;
const PSW_ZERO: u8 = 0x40;
const PSW_AUX_CARRY: u8 = 0x10;
const PSW_PARITY: u8 = 0x04;
const PSW_CARRY: u8 = 0x01;

/// Bit 1 of the PSW byte reads as 1 on real hardware.
pub const PSW_ALWAYS_ONE: u8 = 0x02;
/// Bits 3 and 5 of the PSW byte read as 0 on real hardware.
pub const PSW_ALWAYS_ZERO: u8 = 0x28;

/// The five 8080 condition flags.
///
/// Each flag is an independent boolean; the packed byte layout only exists
/// for PUSH PSW / POP PSW, via [`Flags::to_byte`] and [`Flags::from_byte`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,
    pub s: bool,
    pub p: bool,
    pub cy: bool,
    pub ac: bool,
}

impl Flags {
    /// Serialize to the PSW byte: S Z 0 AC 0 P 1 CY, from bit 7 down.
    pub fn to_byte(self) -> u8 {
        let mut psw = PSW_ALWAYS_ONE;
        if self.s {
            psw |= PSW_SIGN;
        }
        if self.z {
            psw |= PSW_ZERO;
        }
        if self.ac {
            psw |= PSW_AUX_CARRY;
        }
        if self.p {
            psw |= PSW_PARITY;
        }
        if self.cy {
            psw |= PSW_CARRY;
        }
        psw
    }

    /// Deserialize from the PSW byte, ignoring the constant bits.
    pub fn from_byte(psw: u8) -> Self {
        Self {
            s: psw & PSW_SIGN != 0,
            z: psw & PSW_ZERO != 0,
            ac: psw & PSW_AUX_CARRY != 0,
            p: psw & PSW_PARITY != 0,
            cy: psw & PSW_CARRY != 0,
        }
    }
}
