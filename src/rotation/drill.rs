use crate::primitives::{block_swap_backward, block_swap_forward};
use crate::rotation::stack;

/// The helix convergence with the per-phase work hoisted out: the
/// modulo-reduced run length is computed once per phase and handed to a
/// single walking block swap, alternating forward and backward scans. The
/// walks deliberately trail-overlap, which is exactly the behavior the
/// primitives guarantee for the chosen directions.
pub fn rotate<T: Copy>(s: &mut [T], mut left: usize, mut right: usize) {
    debug_assert_eq!(left + right, s.len());

    if left == 0 || right == 0 {
        return;
    }

    let mut start = 0;
    let mut mid = left;
    let mut end = s.len();

    while left > 1 {
        if left <= right {
            right %= left;

            let n = end - mid - right;
            block_swap_forward(s, start, mid, n);
            start += n;
            mid += n;
        }

        if right <= 1 {
            break;
        }

        left %= right;

        let n = mid - start - left;
        block_swap_backward(s, mid - n, end - n, n);
        mid -= n;
        end -= n;
    }

    if left > 0 && right > 0 {
        stack::rotate(&mut s[start..start + left + right], left, right);
    }
}
