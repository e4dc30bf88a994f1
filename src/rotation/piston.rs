use crate::primitives::{block_swap_backward, block_swap_forward};

/// Successive-subtraction block swapping. The smaller segment is swapped
/// against the far end of the larger side, so each pass finalizes a
/// smaller-segment-sized block at one extremity and leaves a single
/// shrunken sub-problem behind: the start offset advances only when the
/// right side is the smaller one. Fewer scan-direction changes than the
/// symmetric reduction for lopsided ratios.
pub fn rotate<T>(s: &mut [T], mut left: usize, mut right: usize) {
    debug_assert_eq!(left + right, s.len());

    let mut start = 0;

    while left > 0 && right > 0 {
        if left <= right {
            block_swap_forward(s, start, start + right, left);
            right -= left;
        } else {
            block_swap_backward(s, start, start + left, right);
            start += right;
            left -= right;
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[0, 1, 2, 3, 4], 2 => vec![2, 3, 4, 0, 1] ; "left smaller")]
    #[test_case(&[0, 1, 2, 3, 4], 3 => vec![3, 4, 0, 1, 2] ; "right smaller")]
    #[test_case(&[0, 1, 2, 3, 4, 5], 3 => vec![3, 4, 5, 0, 1, 2] ; "even split")]
    #[test_case(&[0, 1, 2, 3, 4, 5, 6, 7], 3 => vec![3, 4, 5, 6, 7, 0, 1, 2] ; "alternating sides")]
    fn rotation(s: &[u8], left: usize) -> Vec<u8> {
        let mut s = s.to_vec();
        let right = s.len() - left;

        rotate(&mut s, left, right);

        s
    }

    #[test]
    fn long_subtraction_chain() {
        let n = 34 + 21;
        let mut s: Vec<usize> = (0..n).collect();
        let expected: Vec<usize> = (0..n).map(|i| (i + 34) % n).collect();

        rotate(&mut s, 34, 21);

        assert_eq!(s, expected);
    }
}
