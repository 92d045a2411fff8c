/// Incremental mean.
///
/// Given the mean `mean` of `n` samples and a new `sample`, returns the mean of
/// all `n + 1` samples. With `n == 0` the sample seeds the mean directly.
#[inline]
pub fn moving_avg(mean: f64, n: usize, sample: f64) -> f64 {
    if n == 0 {
        return sample;
    }
    mean + (sample - mean) / (n as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(samples: &[f64]) -> Vec<f64> {
        let mut mean = 0.0;
        samples
            .iter()
            .enumerate()
            .map(|(n, &s)| {
                mean = moving_avg(mean, n, s);
                mean
            })
            .collect()
    }

    #[test]
    fn ten_twenty_thirty() {
        assert_eq!(running(&[10.0, 20.0, 30.0]), vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn first_sample_ignores_previous_mean() {
        assert_eq!(moving_avg(123.0, 0, 4.0), 4.0);
    }

    #[test]
    fn matches_prefix_mean() {
        let samples = [
            16.6, 17.1, 33.4, 0.5, 16.9, 250.0, 8.3, 16.7, 1e-3, 42.0, 16.6, 16.8,
        ];
        let incremental = running(&samples);

        for (i, got) in incremental.iter().enumerate() {
            let prefix = &samples[..=i];
            let expected = prefix.iter().sum::<f64>() / prefix.len() as f64;
            assert!(
                (got - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "prefix {i}: {got} != {expected}"
            );
        }
    }
}
