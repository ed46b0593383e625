use std::collections::VecDeque;

/// スカラー計測値の固定長スライディングウィンドウ
///
/// 直近フレームの値 (距離など) が単調に増えて/減っているかを判定する
/// ための補助。呼び出し側が所有し、フレームごとに push する。
#[derive(Debug, Clone)]
pub struct Trajectory {
    window: VecDeque<f32>,
    capacity: usize,
}

impl Trajectory {
    pub fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// 値を追加。満杯なら最古の値を捨てる。
    pub fn push(&mut self, value: f32) {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.window.len() == self.capacity
    }

    /// 全隣接ペアが厳密に増加しているか
    pub fn is_increasing(&self) -> bool {
        self.window
            .iter()
            .zip(self.window.iter().skip(1))
            .all(|(a, b)| a < b)
    }

    /// 全隣接ペアが厳密に減少しているか
    pub fn is_decreasing(&self) -> bool {
        self.window
            .iter()
            .zip(self.window.iter().skip(1))
            .all(|(a, b)| a > b)
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest_when_full() {
        let mut t = Trajectory::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            t.push(v);
        }
        assert_eq!(t.len(), 3);
        assert!(t.is_full());
        // 先頭の 1.0 が落ちて [2, 3, 4]
        assert!(t.is_increasing());
    }

    #[test]
    fn test_increasing_and_decreasing() {
        let mut t = Trajectory::new(4);
        for v in [1.0, 2.0, 5.0] {
            t.push(v);
        }
        assert!(t.is_increasing());
        assert!(!t.is_decreasing());

        t.reset();
        for v in [5.0, 2.0, 1.0] {
            t.push(v);
        }
        assert!(t.is_decreasing());
        assert!(!t.is_increasing());
    }

    #[test]
    fn test_plateau_is_neither() {
        let mut t = Trajectory::new(3);
        for v in [1.0, 1.0, 2.0] {
            t.push(v);
        }
        assert!(!t.is_increasing());
        assert!(!t.is_decreasing());
    }

    #[test]
    fn test_empty_and_single_are_trivially_monotonic() {
        let mut t = Trajectory::new(3);
        assert!(t.is_increasing());
        assert!(t.is_decreasing());
        t.push(1.0);
        assert!(t.is_increasing());
        assert!(t.is_decreasing());
    }
}
