use crate::primitives::block_swap_forward;
use crate::rotation::{contrev, stack, STACK_DEPTH};

/// Hybrid of the conjoined triple reversal and the bridge, picking the
/// cheapest sub-strategy for the call's shape without ever touching the
/// heap: the stack rotation when a whole segment fits its buffer, a
/// stack-buffered bridge when only the segment difference does, the fused
/// reversal scan otherwise.
pub fn rotate<T: Copy>(s: &mut [T], left: usize, right: usize) {
    debug_assert_eq!(left + right, s.len());

    if left == 0 || right == 0 {
        return;
    }

    if left.min(right) <= STACK_DEPTH {
        stack::rotate(s, left, right);
        return;
    }

    let bridge = left.abs_diff(right);

    if bridge > STACK_DEPTH {
        contrev::rotate(s, left, right);
        return;
    }

    if bridge == 0 {
        block_swap_forward(s, 0, left, left);
        return;
    }

    let mut swap = [s[0]; STACK_DEPTH];

    if left < right {
        swap[..bridge].copy_from_slice(&s[left..right]);

        for i in (0..left).rev() {
            s[bridge + i] = s[right + i];
            s[right + i] = s[i];
        }

        s[..bridge].copy_from_slice(&swap[..bridge]);
    } else {
        swap[..bridge].copy_from_slice(&s[right..left]);

        for i in 0..right {
            s[right + i] = s[i];
            s[i] = s[left + i];
        }

        let at = s.len() - bridge;
        s[at..].copy_from_slice(&swap[..bridge]);
    }
}
