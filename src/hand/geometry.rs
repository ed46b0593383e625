use std::f32::consts::PI;

use crate::analysis::orientation::Facing;
use crate::hand::landmark::{Handedness, Landmark};

/// 2ランドマーク間の2D距離
///
/// z は無視する (検出器の深度はスケールが別物のため)。
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    (b.xy() - a.xy()).norm()
}

/// 3点 (p0, p1, p2) が成す関節角度。p1 が頂点。
///
/// |atan2(cross, dot)| により結果は常に [0, π]。
/// まっすぐ伸びた関節は π に、完全に折れた関節は 0 に近づく。
/// 縮退 (同一点によるゼロベクトル) は atan2(0, 0) = 0 として扱う。
pub fn joint_angle(p0: &Landmark, p1: &Landmark, p2: &Landmark) -> f32 {
    let v1 = p0.xy() - p1.xy();
    let v2 = p2.xy() - p1.xy();

    let cross = v1.perp(&v2);
    let dot = v1.dot(&v2);
    cross.atan2(dot).abs()
}

/// 親指関節の符号付き角度。結果は [0, 2π)。
///
/// 親指の屈曲面は他の4指から約90度ねじれており、曲がる向きが
/// 左右の手と手の向き (front/back) の両方で鏡映になる。符号なしの
/// 式では組み合わせによって「伸びた」と「閉じた」が区別できないため、
/// cross積の向きを左右×表裏で反転させてから計算する。
pub fn thumb_joint_angle(
    p0: &Landmark,
    p1: &Landmark,
    p2: &Landmark,
    handedness: Handedness,
    facing: Facing,
) -> f32 {
    let v1 = p0.xy() - p1.xy();
    let v2 = p2.xy() - p1.xy();

    let cross = match (handedness, facing) {
        (Handedness::Left, Facing::Front) | (Handedness::Right, Facing::Back) => v1.perp(&v2),
        (Handedness::Left, Facing::Back) | (Handedness::Right, Facing::Front) => v2.perp(&v1),
    };

    let angle = cross.atan2(v1.dot(&v2));
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}
