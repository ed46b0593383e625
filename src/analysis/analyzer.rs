use crate::analysis::boundary::{find_boundary_landmarks, BoundaryLandmarks};
use crate::analysis::finger::{
    finger_joint_angles, finger_state, thumb_joint_angles, FingerThresholds,
};
use crate::analysis::orientation::{detect_orientation, Direction, Facing};
use crate::config::FingerConfig;
use crate::hand::landmark::{Finger, HandLandmarks, Handedness};

/// 1フレーム分の解析結果
///
/// レンダラーや上位アプリへそのまま渡せるプレーンなデータ。
#[derive(Debug, Clone, Copy)]
pub struct HandFeatures {
    /// 指ごとの状態値 (親指, 人差し指, 中指, 薬指, 小指)
    pub finger_states: [usize; Finger::COUNT],
    pub direction: Direction,
    pub facing: Facing,
    pub boundary: BoundaryLandmarks,
}

/// ランドマークから特徴量一式を導出する解析器
///
/// 状態を持たないため、フレームごとの呼び出しは完全に独立。
#[derive(Debug, Clone, Default)]
pub struct HandAnalyzer {
    thresholds: FingerThresholds,
}

impl HandAnalyzer {
    pub fn new(thresholds: FingerThresholds) -> Self {
        Self { thresholds }
    }

    pub fn from_config(config: &FingerConfig) -> Self {
        Self::new(FingerThresholds::from_config(config))
    }

    /// 向き・表裏・境界・指状態をまとめて計算
    pub fn analyze(&self, hand: &HandLandmarks, handedness: Handedness) -> HandFeatures {
        let orientation = detect_orientation(hand, handedness);
        let boundary = find_boundary_landmarks(hand);

        let mut finger_states = [0usize; Finger::COUNT];
        for finger in Finger::all() {
            let angle_sum: f32 = match finger {
                Finger::Thumb => thumb_joint_angles(hand, handedness, orientation.facing)
                    .iter()
                    .sum(),
                _ => finger_joint_angles(hand, finger).iter().sum(),
            };
            finger_states[finger as usize] =
                finger_state(angle_sum, self.thresholds.for_finger(finger));
        }

        HandFeatures {
            finger_states,
            direction: orientation.direction,
            facing: orientation.facing,
            boundary,
        }
    }
}
