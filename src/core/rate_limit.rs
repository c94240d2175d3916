//! Per-logger token bucket with whole-second refill
//!
//! The bucket refills to full at most once per elapsed wall-clock second:
//! when the current second differs from the recorded refill boundary the
//! bucket resets to `burst` and the boundary advances. This is intentionally
//! approximate, trading burst tolerance for low overhead on the hot path.

#[derive(Debug)]
pub struct RateLimiter {
    burst: u32,
    available: u32,
    last_refill_sec: i64,
    suppressed: u64,
}

impl RateLimiter {
    pub fn new(burst: u32) -> Self {
        Self {
            burst,
            available: burst,
            last_refill_sec: 0,
            suppressed: 0,
        }
    }

    /// Consume one token if available at `now_sec` (unix seconds).
    ///
    /// Returns false when the bucket is exhausted for the current second;
    /// the denial is counted as a suppression. A `burst` of zero admits
    /// nothing.
    pub fn try_consume(&mut self, now_sec: i64) -> bool {
        if now_sec != self.last_refill_sec {
            self.available = self.burst;
            self.last_refill_sec = now_sec;
        }
        if self.available > 0 {
            self.available -= 1;
            true
        } else {
            self.suppressed += 1;
            false
        }
    }

    /// Number of calls denied by the bucket since construction.
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed
    }

    pub fn burst(&self) -> u32 {
        self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_exhaustion_within_second() {
        let mut limiter = RateLimiter::new(3);
        assert!(limiter.try_consume(100));
        assert!(limiter.try_consume(100));
        assert!(limiter.try_consume(100));
        // fourth call in the same second is denied
        assert!(!limiter.try_consume(100));
        assert_eq!(limiter.suppressed_count(), 1);
    }

    #[test]
    fn test_refill_on_second_boundary() {
        let mut limiter = RateLimiter::new(2);
        assert!(limiter.try_consume(100));
        assert!(limiter.try_consume(100));
        assert!(!limiter.try_consume(100));

        // crossing the boundary resets the bucket to full
        assert!(limiter.try_consume(101));
        assert!(limiter.try_consume(101));
        assert!(!limiter.try_consume(101));
        assert_eq!(limiter.suppressed_count(), 2);
    }

    #[test]
    fn test_refill_is_reset_not_accumulation() {
        let mut limiter = RateLimiter::new(5);
        assert!(limiter.try_consume(100));
        // several idle seconds do not grow the bucket past burst
        assert!(limiter.try_consume(110));
        for _ in 0..4 {
            assert!(limiter.try_consume(110));
        }
        assert!(!limiter.try_consume(110));
    }

    #[test]
    fn test_zero_burst_admits_nothing() {
        let mut limiter = RateLimiter::new(0);
        assert!(!limiter.try_consume(1));
        assert!(!limiter.try_consume(2));
        assert_eq!(limiter.suppressed_count(), 2);
    }
}
