/// partitions a committed visiting order into `workers` contiguous chunks
/// whose lengths differ by at most one, earlier chunks taking the extra
/// stop. contiguity is the point: each field employee walks one connected
/// stretch of the route instead of hopping across the colony.
///
/// zero workers or an empty order yields no chunks; more workers than stops
/// leaves the trailing chunks empty.
pub fn split_evenly<T>(ordered: &[T], workers: usize) -> Vec<&[T]> {
    if workers == 0 || ordered.is_empty() {
        return vec![];
    }
    let base = ordered.len() / workers;
    let extra = ordered.len() % workers;
    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;
    for worker in 0..workers {
        let len = if worker < extra { base + 1 } else { base };
        chunks.push(&ordered[start..start + len]);
        start += len;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_division() {
        let order = [1, 2, 3, 4, 5, 6];
        let chunks = split_evenly(&order, 3);
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }

    #[test]
    fn test_remainder_goes_to_earlier_workers() {
        let order = [1, 2, 3, 4, 5];
        let chunks = split_evenly(&order, 3);
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn test_concatenation_reproduces_the_order() {
        let order: Vec<u32> = (0..23).collect();
        let chunks = split_evenly(&order, 4);
        let lengths = chunks.iter().map(|c| c.len()).collect::<Vec<_>>();
        let spread = lengths.iter().max().unwrap() - lengths.iter().min().unwrap();
        assert!(spread <= 1);
        let rejoined: Vec<u32> = chunks.concat();
        assert_eq!(rejoined, order);
    }

    #[test]
    fn test_more_workers_than_stops() {
        let order = [1, 2];
        let chunks = split_evenly(&order, 5);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0], &[1]);
        assert_eq!(chunks[1], &[2]);
        assert!(chunks[2].is_empty() && chunks[3].is_empty() && chunks[4].is_empty());
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty: [u32; 0] = [];
        assert!(split_evenly(&empty, 3).is_empty());
        assert!(split_evenly(&[1, 2, 3], 0).is_empty());
    }
}
