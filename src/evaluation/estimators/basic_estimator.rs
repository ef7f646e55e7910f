use crate::evaluation::estimators::Estimator;

/// Running mean `sum / len`. `NaN` observations are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: usize,
    sum: f64,
}

impl BasicEstimator {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }
}
