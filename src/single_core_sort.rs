// Trait aliasing for readibility
// https://stackoverflow.com/questions/26070559/is-there-any-way-to-create-a-type-alias-for-multiple-traits
pub trait SortTraits: Clone + PartialOrd {}
impl<T: Clone + PartialOrd> SortTraits for T {}

/// Up to this length the hybrid quicksort hands the range to insertion sort.
pub const QUICKSORT_THRESHOLD: usize = 47;

/// Quicksort with a median-of-three pivot and a three-way partition,
/// so runs of values equal to the pivot are settled in one pass.
pub fn quick_sort<T: SortTraits>(values: &mut [T]) {
    quick_sort_range(values, 0);
}

/// Same partitioning as [`quick_sort`], but ranges of at most `threshold`
/// elements are finished with insertion sort.
pub fn quick_sort_with_cutoff<T: SortTraits>(values: &mut [T], threshold: usize) {
    quick_sort_range(values, threshold);
}

fn quick_sort_range<T: SortTraits>(values: &mut [T], threshold: usize) {
    let mut range = values;
    loop {
        if range.len() <= 1 {
            return;
        }
        if below_cutoff(range.len(), threshold) {
            insertion_sort(range);
            return;
        }
        let (lt, gt) = partition(range);
        let (lower, rest) = std::mem::take(&mut range).split_at_mut(lt);
        let upper = &mut rest[gt - lt..];
        // Recurse on the smaller side, loop on the larger one
        if lower.len() < upper.len() {
            quick_sort_range(lower, threshold);
            range = upper;
        } else {
            quick_sort_range(upper, threshold);
            range = lower;
        }
    }
}

fn below_cutoff(len: usize, threshold: usize) -> bool {
    len <= threshold
}

/// Returns `(lt, gt)` such that `values[..lt] < pivot`,
/// `values[lt..gt] == pivot` and `values[gt..] > pivot`.
/// The middle region always holds at least the pivot itself.
fn partition<T: SortTraits>(values: &mut [T]) -> (usize, usize) {
    let high = values.len() - 1;
    let mid = high / 2;
    if values[0] > values[mid] {
        values.swap(0, mid);
    }
    if values[0] > values[high] {
        values.swap(0, high);
    }
    if values[mid] > values[high] {
        values.swap(mid, high);
    }
    let pivot = values[mid].clone();

    let mut lt = 0;
    let mut idx = 0;
    let mut gt = values.len();
    while idx < gt {
        if values[idx] < pivot {
            values.swap(lt, idx);
            lt += 1;
            idx += 1;
        } else if values[idx] > pivot {
            gt -= 1;
            values.swap(idx, gt);
        } else {
            idx += 1;
        }
    }
    (lt, gt)
}

/// Bubble sort, kept under the name it was benchmarked with.
pub fn custom_sort<T: SortTraits>(values: &mut [T]) {
    let mut end = values.len();
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for id in 1..end {
            if values[id - 1] > values[id] {
                values.swap(id - 1, id);
                sorted = false;
            }
        }
        // The largest value of the pass is now in its final place
        end = end.saturating_sub(1);
    }
}

pub fn insertion_sort<T: SortTraits>(values: &mut [T]) {
    for id in 1..values.len() {
        let mut pos = id;
        while pos > 0 && values[pos - 1] > values[pos] {
            values.swap(pos - 1, pos);
            pos -= 1;
        }
    }
}

pub fn max_selection_sort<T: SortTraits>(values: &mut [T]) {
    for end in (1..values.len()).rev() {
        let mut max_id = end;
        for id in 0..end {
            if values[id] > values[max_id] {
                max_id = id;
            }
        }
        values.swap(max_id, end);
    }
}

pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
