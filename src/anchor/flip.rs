//! Mirroring of anchors for overflow recovery.
//!
//! The host decides when to flip (usually after [`get_overflow`] reports the
//! floating element escaping its boundary on [`get_axis`]), these functions only
//! produce the candidate.
//!
//! [`get_overflow`]: super::get_overflow
//! [`get_axis`]: super::get_axis

use super::descriptor::AnchorDescriptor;

/// Mirror the side across the activator. Alignment is kept.
pub fn flip_side(anchor: AnchorDescriptor) -> AnchorDescriptor {
    AnchorDescriptor {
        side: anchor.side.opposite(),
        align: anchor.align,
    }
}

/// Mirror the alignment. Side is kept.
pub fn flip_align(anchor: AnchorDescriptor) -> AnchorDescriptor {
    AnchorDescriptor {
        side: anchor.side,
        align: anchor.align.opposite(),
    }
}

/// Swap side and alignment, e.g. `top left` becomes `left top`.
pub fn flip_corner(anchor: AnchorDescriptor) -> AnchorDescriptor {
    AnchorDescriptor {
        side: anchor.align.into(),
        align: anchor.side.into(),
    }
}
