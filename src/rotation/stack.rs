use crate::rotation::STACK_DEPTH;

/// Auxiliary-style rotation whose buffer is a fixed local array instead of
/// a heap allocation, so it cannot fail. A single pass when the smaller
/// segment fits the buffer, which is the regime it is meant for (and the
/// form the block-swap variants use to finish their residual pair); larger
/// segments decompose into buffer-sized rotations of the whole range.
pub fn rotate<T: Copy>(s: &mut [T], left: usize, right: usize) {
    debug_assert_eq!(left + right, s.len());

    if left == 0 || right == 0 {
        return;
    }

    let mut swap = [s[0]; STACK_DEPTH];

    if left <= right {
        let mut left = left;
        while left > 0 {
            let step = left.min(STACK_DEPTH);
            let at = s.len() - step;

            swap[..step].copy_from_slice(&s[..step]);
            s.copy_within(step.., 0);
            s[at..].copy_from_slice(&swap[..step]);

            left -= step;
        }
    } else {
        let mut right = right;
        while right > 0 {
            let step = right.min(STACK_DEPTH);
            let at = s.len() - step;

            swap[..step].copy_from_slice(&s[at..]);
            s.copy_within(..at, step);
            s[..step].copy_from_slice(&swap[..step]);

            right -= step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotated(n: usize, left: usize) -> Vec<usize> {
        (0..n).map(|i| (i + left) % n).collect()
    }

    #[test]
    fn single_pass_within_buffer() {
        let mut s: Vec<usize> = (0..20).collect();

        rotate(&mut s, 3, 17);

        assert_eq!(s, rotated(20, 3));
    }

    #[test]
    fn right_side_within_buffer() {
        let mut s: Vec<usize> = (0..20).collect();

        rotate(&mut s, 15, 5);

        assert_eq!(s, rotated(20, 15));
    }

    #[test]
    fn decomposes_when_buffer_overflows() {
        let mut s: Vec<usize> = (0..64).collect();

        rotate(&mut s, 27, 37);

        assert_eq!(s, rotated(64, 27));
    }

    #[test]
    fn exact_buffer_boundary() {
        let mut s: Vec<usize> = (0..32).collect();

        rotate(&mut s, 32 - STACK_DEPTH, STACK_DEPTH);

        assert_eq!(s, rotated(32, 32 - STACK_DEPTH));
    }
}
