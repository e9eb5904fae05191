use rand::{seq::index, Rng};

/// One in five recordings of each group is held out for testing.
pub const TEST_FRACTION_DENOMINATOR: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub test: Vec<T>,
}

/// Draws `floor(n / 5)` items without replacement for the test set; the rest train.
/// Both halves keep the input order.
pub fn split_group<T, R>(items: Vec<T>, rng: &mut R) -> Split<T>
where
    R: Rng + ?Sized,
{
    let total = items.len();
    let test_count = total / TEST_FRACTION_DENOMINATOR;

    let mut is_test = vec![false; total];
    for i in index::sample(rng, total, test_count) {
        is_test[i] = true;
    }

    let mut split = Split {
        train: Vec::with_capacity(total - test_count),
        test: Vec::with_capacity(test_count),
    };
    for (item, test) in items.into_iter().zip(is_test) {
        if test {
            split.test.push(item);
        } else {
            split.train.push(item);
        }
    }
    split
}
