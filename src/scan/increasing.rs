use tracing::error;

/// Strictly increasing contiguous run with the largest sum.
///
/// Only runs of two or more elements compete, and a later run must beat the
/// best sum outright to replace it. When nothing qualifies the answer is the
/// largest single element. Sums are kept in `i64`.
pub fn max_increasing_run(numbers: &[i32]) -> Vec<i32> {
    let Some(&first) = numbers.first() else {
        return Vec::new();
    };
    if numbers.len() == 1 {
        return vec![first];
    }

    let mut best: Option<(usize, usize, i64)> = None;
    let mut start = 0;
    let mut sum = i64::from(first);

    for (index, pair) in numbers.windows(2).enumerate() {
        let current = index + 1;
        if pair[1] > pair[0] {
            sum += i64::from(pair[1]);
            continue;
        }

        consider(&mut best, start, current, sum);
        start = current;
        sum = i64::from(pair[1]);
    }
    consider(&mut best, start, numbers.len(), sum);

    match best {
        Some((from, to, _)) => numbers[from..to].to_vec(),
        None => numbers.iter().max().map(|max| vec![*max]).unwrap_or_default(),
    }
}

/// Records `numbers[start..end]` as the best run if it has two or more
/// elements and strictly beats the current best sum.
fn consider(best: &mut Option<(usize, usize, i64)>, start: usize, end: usize, sum: i64) {
    if end - start < 2 {
        return;
    }
    if best.map_or(true, |(_, _, best_sum)| sum > best_sum) {
        *best = Some((start, end, sum));
    }
}

/// Renders the winning run as a JSON array; an absent list reads as empty.
pub fn increasing_run_json(numbers: Option<&[i32]>) -> String {
    let run = max_increasing_run(numbers.unwrap_or_default());
    serde_json::to_string(&run).unwrap_or_else(|err| {
        error!(error = %err, "increasing run could not be serialized");
        "[]".to_string()
    })
}
