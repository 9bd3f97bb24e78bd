//! 实体 ID 生成
//!
//! ID 取当前微秒时间戳的十进制字符串；同一微秒内的多次请求顺延加一，
//! 保证同一进程内严格递增、不重复。

use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_micros();
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => current = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids = IdGenerator::new();
        let mut previous: i64 = 0;
        for _ in 0..1000 {
            let id: i64 = ids.next_id().parse().unwrap();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..500).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id generated");
            }
        }
        assert_eq!(seen.len(), 2000);
    }
}
