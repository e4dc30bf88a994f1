/// Copies the smaller segment into a scratch buffer, shifts the larger
/// segment into place with an overlapping move, then drops the buffer into
/// the vacated range. The simplest variant, and the correctness reference
/// the harness validates every other variant against.
///
/// The buffer is acquired before any mutation, so a failed allocation
/// leaves the sequence untouched.
pub fn rotate<T: Copy>(s: &mut [T], left: usize, right: usize) {
    debug_assert_eq!(left + right, s.len());

    if left == 0 || right == 0 {
        return;
    }

    if left < right {
        let swap = s[..left].to_vec();

        s.copy_within(left.., 0);
        s[right..].copy_from_slice(&swap);
    } else {
        let swap = s[left..].to_vec();

        s.copy_within(..left, right);
        s[..right].copy_from_slice(&swap);
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[0, 1, 2, 3, 4], 2 => vec![2, 3, 4, 0, 1] ; "left smaller")]
    #[test_case(&[0, 1, 2, 3, 4], 3 => vec![3, 4, 0, 1, 2] ; "right smaller")]
    #[test_case(&[0, 1, 2, 3], 2 => vec![2, 3, 0, 1] ; "even split")]
    #[test_case(&[0, 1, 2], 0 => vec![0, 1, 2] ; "empty left")]
    #[test_case(&[0, 1, 2], 3 => vec![0, 1, 2] ; "empty right")]
    #[test_case(&[], 0 => Vec::<u8>::new() ; "empty sequence")]
    fn rotation(s: &[u8], left: usize) -> Vec<u8> {
        let mut s = s.to_vec();
        let right = s.len() - left;

        rotate(&mut s, left, right);

        s
    }
}
