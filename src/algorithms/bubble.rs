//! See [bubble_sort()]


/// Sorts a copy of `sequence` through repeated adjacent compare-and-swap passes.\
/// Each pass bubbles the greatest remaining element to the end of the unsorted prefix, shrinking it by one;
/// a pass without swaps means the sequence is already sorted and ends the algorithm early.\
/// Stable: only strictly-greater neighbours are swapped.
pub fn bubble_sort<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    let mut sorted = sequence.to_vec();
    let mut unsorted_len = sorted.len();
    while unsorted_len > 1 {
        let mut swapped = false;
        for i in 1..unsorted_len {
            if sorted[i-1] > sorted[i] {
                sorted.swap(i-1, i);
                swapped = true;
            }
        }
        if !swapped {
            break
        }
        unsorted_len -= 1;
    }
    sorted
}
