// encoder.rs
//
// Bit-range compilation: turns a fixed part into the value bits and mask
// bits it contributes to an encoding, positioned at the right offset.

use crate::ast::FixedPart;
use tracing::warn;

/// Bits contributed by a single fixed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedBits {
    pub value: u32,
    pub mask: u32,
}

impl FixedBits {
    /// OR another part's bits into this one. Re-asserting a bit is harmless.
    pub fn merge(&mut self, other: FixedBits) {
        self.value |= other.value;
        self.mask |= other.mask;
    }
}

/// Compile a fixed part into positioned value and mask bits.
///
/// `hi..lo=v` yields `mask = ones(hi-lo+1) << lo` and `value = v << lo`;
/// `b=v` yields `mask = 1 << b` and `value = v << b`. A value wider than its
/// range is clipped to the range (with a warning) so it never spills into
/// neighbouring bits.
pub fn compile(part: &FixedPart) -> FixedBits {
    let lo = part.bits.lo();
    let field_mask = (1u64 << part.bits.width()) - 1;

    let clipped = part.value & field_mask;
    if clipped != part.value {
        warn!(
            "value 0x{:x} does not fit in bits {}, keeping 0x{:x}",
            part.value, part.bits, clipped
        );
    }

    FixedBits { value: (clipped << lo) as u32, mask: (field_mask << lo) as u32 }
}
