use crate::rotation::stack;

/// Convergent modulo reduction. Instead of subtracting the smaller side
/// one multiple at a time, each phase computes `right %= left` (or
/// `left %= right`) and walks the whole surplus out in one run of
/// single-element swaps, cursors converging from both ends of a shrinking
/// window. Once either side drops to one or less, the stack rotation
/// finishes the residual window. Fewer total element moves than the naive
/// block-swap reduction when the sides are close in size.
pub fn rotate<T: Copy>(s: &mut [T], mut left: usize, mut right: usize) {
    debug_assert_eq!(left + right, s.len());

    if left == 0 || right == 0 {
        return;
    }

    let mut start = 0;
    let mut mid = left;
    let mut end = s.len();

    // The window [start, end) is the unresolved range; mid tracks the
    // segment boundary inside it, and end - mid == right, mid - start ==
    // left hold at the top of every phase.
    while left > 1 {
        if left <= right {
            right %= left;

            let mut n = end - mid - right;
            while n > 0 {
                s.swap(start, mid);
                start += 1;
                mid += 1;
                n -= 1;
            }
        }

        if right <= 1 {
            break;
        }

        left %= right;

        let mut n = mid - start - left;
        while n > 0 {
            mid -= 1;
            end -= 1;
            s.swap(mid, end);
            n -= 1;
        }
    }

    if left > 0 && right > 0 {
        stack::rotate(&mut s[start..start + left + right], left, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(n: usize, left: usize) {
        let mut s: Vec<usize> = (0..n).collect();
        let expected: Vec<usize> = (0..n).map(|i| (i + left) % n).collect();

        rotate(&mut s, left, n - left);

        assert_eq!(s, expected, "n = {n}, left = {left}");
    }

    #[test]
    fn near_equal_sides() {
        check(10, 5);
        check(11, 5);
        check(11, 6);
    }

    #[test]
    fn dividing_sides_finish_without_residual() {
        check(6, 2);
        check(12, 3);
    }

    #[test]
    fn residual_on_either_side() {
        check(7, 2);
        check(7, 5);
        check(100, 37);
        check(100, 63);
    }

    #[test]
    fn one_sided() {
        check(9, 1);
        check(9, 8);
    }
}
