//! See [insertion_sort()]


/// Sorts a copy of `sequence` by growing a sorted prefix: for each position `i` from 1 on, the element at `i` is held as
/// the "key", every preceding element greater than it is shifted one slot to the right and the key lands in the vacated slot.\
/// Stable, as equal elements are never shifted past each other.
pub fn insertion_sort<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    let mut sorted = sequence.to_vec();
    for i in 1..sorted.len() {
        let key = sorted[i].clone();
        let mut j = i;
        // shift larger elements right
        while j > 0 && sorted[j-1] > key {
            sorted[j] = sorted[j-1].clone();
            j -= 1;
        }
        sorted[j] = key;
    }
    sorted
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_goes_to_the_front() {
        assert_eq!(insertion_sort(&[2, 3, 4, 1]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn duplicates_and_negatives() {
        assert_eq!(insertion_sort(&[0, -7, 3, -7, 3]), vec![-7, -7, 0, 3, 3]);
    }
}
