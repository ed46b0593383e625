use crate::hand::landmark::HandLandmarks;

/// 境界ランドマーク: x最大 / x最小 / y最大 / y最小 を取るインデックス
///
/// フレームごとに再計算される純粋な派生値。同値の場合は先頭側の
/// インデックスを採用する (線形走査の first-occurrence、再現性のため固定)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryLandmarks {
    pub x_max: usize,
    pub x_min: usize,
    pub y_max: usize,
    pub y_min: usize,
}

/// 21点の境界ランドマークを検出
pub fn find_boundary_landmarks(hand: &HandLandmarks) -> BoundaryLandmarks {
    let mut b = BoundaryLandmarks {
        x_max: 0,
        x_min: 0,
        y_max: 0,
        y_min: 0,
    };

    for (i, p) in hand.iter().enumerate().skip(1) {
        // 厳密な比較で先勝ちを保つ
        if p.x > hand.at(b.x_max).x {
            b.x_max = i;
        }
        if p.x < hand.at(b.x_min).x {
            b.x_min = i;
        }
        if p.y > hand.at(b.y_max).y {
            b.y_max = i;
        }
        if p.y < hand.at(b.y_min).y {
            b.y_min = i;
        }
    }

    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmark::{Landmark, LandmarkIndex};

    fn hand_with(points: &[(usize, f32, f32)]) -> HandLandmarks {
        let mut lms = [Landmark::default(); LandmarkIndex::COUNT];
        for &(i, x, y) in points {
            lms[i] = Landmark::new(x, y, 0.0);
        }
        HandLandmarks::new(lms)
    }

    #[test]
    fn test_unique_extrema() {
        let hand = hand_with(&[(5, 10.0, 0.0), (3, -5.0, 0.0), (12, 0.0, 30.0), (2, 0.0, -4.0)]);
        let b = find_boundary_landmarks(&hand);
        assert_eq!(b.x_max, 5);
        assert_eq!(b.x_min, 3);
        assert_eq!(b.y_max, 12);
        assert_eq!(b.y_min, 2);
    }

    #[test]
    fn test_tie_breaks_to_first_index() {
        // lm5 と lm7 が同じ最大x → 先に現れる 5 を返す
        let hand = hand_with(&[(5, 10.0, 0.0), (7, 10.0, 0.0), (1, -1.0, -1.0)]);
        let b = find_boundary_landmarks(&hand);
        assert_eq!(b.x_max, 5);
    }

    #[test]
    fn test_all_equal_returns_index_zero() {
        let hand = hand_with(&[]);
        let b = find_boundary_landmarks(&hand);
        assert_eq!(b, BoundaryLandmarks { x_max: 0, x_min: 0, y_max: 0, y_min: 0 });
    }

    #[test]
    fn test_extremum_survives_value_permutation() {
        // 他の点の値を入れ替えても唯一の最大xの持ち主は変わらない
        let hand_a = hand_with(&[(9, 50.0, 0.0), (1, 3.0, 0.0), (2, 7.0, 0.0)]);
        let hand_b = hand_with(&[(9, 50.0, 0.0), (1, 7.0, 0.0), (2, 3.0, 0.0)]);
        assert_eq!(find_boundary_landmarks(&hand_a).x_max, 9);
        assert_eq!(find_boundary_landmarks(&hand_b).x_max, 9);
    }
}
