//! Counting of bowl-shaped subarrays.

/// Returns the number of subarrays of length at least 3 whose two ends
/// are both at least as large as every value between them, counting one
/// bowl per (end, nearest taller-or-equal neighbor) pair in each
/// direction.
///
/// With distinct values this is exactly the number of subarrays whose
/// ends exceed every interior value. Runs in linear time.
pub fn bowl_subarrays<T: Ord>(values: &[T]) -> u64 {
    let right = nearest_at_least(values, (0..values.len()).rev());
    let left = nearest_at_least(values, 0..values.len());

    let mut count = 0;
    for i in 0..values.len() {
        if matches!(right[i], Some(r) if r >= i + 2) {
            count += 1;
        }
        if matches!(left[i], Some(l) if i >= l + 2) {
            count += 1;
        }
    }
    count
}

/// For each index, visited in `order`, returns the index of the closest
/// value already visited that is not smaller than it.
fn nearest_at_least<T: Ord>(values: &[T], order: impl Iterator<Item = usize>) -> Vec<Option<usize>> {
    let mut nearest = vec![None; values.len()];
    let mut stack: Vec<usize> = Vec::new();
    for i in order {
        while let Some(&top) = stack.last() {
            if values[i] > values[top] {
                stack.pop();
            } else {
                break;
            }
        }
        nearest[i] = stack.last().copied();
        stack.push(i);
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::{bowl_subarrays, nearest_at_least};

    #[test]
    fn test_bowl_subarrays() {
        assert_eq!(bowl_subarrays(&[2, 5, 3, 1, 4]), 2);
        assert_eq!(bowl_subarrays(&[5, 1, 2, 3, 4]), 3);
        assert_eq!(bowl_subarrays(&[1_000_000_000, 999_999_999, 999_999_998]), 0);
    }

    #[test]
    fn test_short_slices() {
        assert_eq!(bowl_subarrays::<i32>(&[]), 0);
        assert_eq!(bowl_subarrays(&[1]), 0);
        assert_eq!(bowl_subarrays(&[3, 1]), 0);
        assert_eq!(bowl_subarrays(&[3, 1, 3]), 2);
    }

    #[test]
    fn test_monotone_slices() {
        assert_eq!(bowl_subarrays(&[1, 2, 3, 4, 5, 6]), 0);
        assert_eq!(bowl_subarrays(&[6, 5, 4, 3, 2, 1]), 0);
    }

    #[test]
    fn test_nearest_at_least() {
        let values = [2, 5, 3, 1, 4];
        assert_eq!(
            nearest_at_least(&values, (0..5).rev()),
            vec![Some(1), None, Some(4), Some(4), None]
        );
        assert_eq!(
            nearest_at_least(&values, 0..5),
            vec![None, None, Some(1), Some(2), Some(1)]
        );
    }
}
