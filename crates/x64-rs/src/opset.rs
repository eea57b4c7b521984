//! Operand-category sets for instruction-form selection.
//!
//! [`OpSet`] is a fixed-width bitmask over the operand categories the
//! x86-64 encoder distinguishes when deciding whether a candidate operand
//! satisfies an instruction template.  Every algebra operation and equality
//! test is O(1) on a single machine word — no heap allocation on the
//! form-selection hot path.

use core::fmt;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

/// A set of operand categories.
///
/// The universe of categories is fixed at compile time; complement is total
/// over it, and the all-zero value is the empty set.  Sets are composed from
/// the atomic constants via set algebra:
///
/// ```rust
/// use x64_rs::OpSet;
///
/// let byte_dst = OpSet::GP8 | OpSet::AL;
/// assert!(byte_dst.contains(OpSet::AL));
/// assert_eq!(byte_dst - OpSet::AL, OpSet::GP8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpSet(u32);

impl OpSet {
    /// The empty set — identity for union, absorbing for intersection.
    pub const EMPTY: Self = Self(0);

    // -- Atomic categories --
    /// Status flag bits (CF, ZF, SF, ...).
    pub const EFLAG: Self = Self(1);
    /// 8-bit general-purpose registers.
    pub const GP8: Self = Self(1 << 1);
    /// 16-bit general-purpose registers.
    pub const GP16: Self = Self(1 << 2);
    /// 32-bit general-purpose registers.
    pub const GP32: Self = Self(1 << 3);
    /// 64-bit general-purpose registers.
    pub const GP64: Self = Self(1 << 4);
    /// The AL register — fixed-register instruction forms (`add al, imm8`).
    pub const AL: Self = Self(1 << 5);
    /// The CL register — shift/rotate count forms.
    pub const CL: Self = Self(1 << 6);
    /// The AX register.
    pub const AX: Self = Self(1 << 7);
    /// The DX register — `in`/`out` port forms.
    pub const DX: Self = Self(1 << 8);
    /// The EAX register.
    pub const EAX: Self = Self(1 << 9);
    /// The RAX register.
    pub const RAX: Self = Self(1 << 10);
    /// Segment registers.
    pub const SREG: Self = Self(1 << 11);
    /// The FS segment register.
    pub const FS: Self = Self(1 << 12);
    /// The GS segment register.
    pub const GS: Self = Self(1 << 13);
    /// 128-bit vector (XMM) registers.
    pub const XMM: Self = Self(1 << 14);
    /// The XMM0 register — implicit-operand blend forms.
    pub const XMM0: Self = Self(1 << 15);
    /// 256-bit vector (YMM) registers.
    pub const YMM: Self = Self(1 << 16);

    /// Number of atomic categories in the universe.
    const FLAG_COUNT: u32 = 17;

    /// Every recognized operand category.
    pub const UNIVERSE: Self = Self((1 << Self::FLAG_COUNT) - 1);

    // -- Grouped categories --
    /// All general-purpose register widths.
    pub const GP: Self = Self::GP8
        .union(Self::GP16)
        .union(Self::GP32)
        .union(Self::GP64);
    /// All vector register widths.
    pub const VEC: Self = Self::XMM.union(Self::YMM);

    /// Set union.  `const` so grouped constants can be composed; callers
    /// normally use `|`.
    #[inline]
    pub const fn union(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Set intersection.
    #[inline]
    pub const fn intersect(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    /// Symmetric difference — categories in exactly one of the two sets.
    #[inline]
    pub const fn symmetric_difference(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    /// Set difference — the categories of `self` not in `rhs`.
    #[inline]
    pub const fn without(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }

    /// Complement over the full universe: `x.complement().complement() == x`.
    #[inline]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::UNIVERSE.0)
    }

    /// True if every category in `other` is also in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share at least one category.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if no category is present.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw bit representation.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Not for OpSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl BitOr for OpSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for OpSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersect(rhs)
    }
}

impl BitXor for OpSet {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl Sub for OpSet {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.without(rhs)
    }
}

impl BitOrAssign for OpSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAndAssign for OpSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersect(rhs);
    }
}

impl BitXorAssign for OpSet {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.symmetric_difference(rhs);
    }
}

impl SubAssign for OpSet {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.without(rhs);
    }
}

impl Default for OpSet {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Atomic category names, in bit order, for [`fmt::Display`].
const NAMES: [(OpSet, &str); OpSet::FLAG_COUNT as usize] = [
    (OpSet::EFLAG, "eflag"),
    (OpSet::GP8, "gp8"),
    (OpSet::GP16, "gp16"),
    (OpSet::GP32, "gp32"),
    (OpSet::GP64, "gp64"),
    (OpSet::AL, "al"),
    (OpSet::CL, "cl"),
    (OpSet::AX, "ax"),
    (OpSet::DX, "dx"),
    (OpSet::EAX, "eax"),
    (OpSet::RAX, "rax"),
    (OpSet::SREG, "sreg"),
    (OpSet::FS, "fs"),
    (OpSet::GS, "gs"),
    (OpSet::XMM, "xmm"),
    (OpSet::XMM0, "xmm0"),
    (OpSet::YMM, "ymm"),
];

impl fmt::Display for OpSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{empty}");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
