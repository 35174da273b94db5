//! See [quick_sort()]


/// Sorts `sequence` through a recursive three-way partition around the middle element (by index):
/// `quick_sort(less) + equal + quick_sort(greater)`.\
/// Sequences of up to 1 element are returned as an owned copy.
///
/// Not an in-place quicksort: every level allocates its partitions. Equal elements form a single, untouched block.
/// The middle pivot splits sorted & reverse-sorted inputs evenly, but adversarial inputs still degrade to `O(n)`
/// recursion depth & `O(n²)` time.
pub fn quick_sort<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    if sequence.len() <= 1 {
        return sequence.to_vec()
    }
    let pivot = &sequence[sequence.len() / 2];
    let mut less    = Vec::new();
    let mut equal   = Vec::new();
    let mut greater = Vec::new();
    for element in sequence {
        match element.cmp(pivot) {
            std::cmp::Ordering::Less    => less.push(element.clone()),
            std::cmp::Ordering::Equal   => equal.push(element.clone()),
            std::cmp::Ordering::Greater => greater.push(element.clone()),
        }
    }
    let mut sorted = quick_sort(&less);
    sorted.append(&mut equal);
    sorted.append(&mut quick_sort(&greater));
    sorted
}
