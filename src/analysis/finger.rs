use crate::analysis::orientation::Facing;
use crate::config::FingerConfig;
use crate::hand::geometry::{joint_angle, thumb_joint_angle};
use crate::hand::landmark::{Finger, HandLandmarks, Handedness, LandmarkIndex};

/// 親指の状態数 (straight / bent / closed)
pub const THUMB_STATE_COUNT: usize = 3;
/// 親指以外の状態数 (straight / claw / bent / closed / clenched)
pub const FINGER_STATE_COUNT: usize = 5;

/// 状態の区切り閾値 (ラジアン、降順)
///
/// 関節角度は「開き」を測るため、合計が大きいほど伸びている。
/// 閾値リストの前後に ±∞ の番兵を挟んで帯域を作り、合計が落ちる
/// 帯域のインデックスをそのまま状態値とする。状態0が最も伸びた形。
#[derive(Debug, Clone)]
pub struct FingerThresholds {
    pub thumb: Vec<f32>,
    pub non_thumb: Vec<f32>,
}

impl FingerThresholds {
    pub fn from_config(config: &FingerConfig) -> Self {
        Self {
            thumb: config.thumb_thresholds.clone(),
            non_thumb: config.finger_thresholds.clone(),
        }
    }

    pub fn for_finger(&self, finger: Finger) -> &[f32] {
        match finger {
            Finger::Thumb => &self.thumb,
            _ => &self.non_thumb,
        }
    }
}

impl Default for FingerThresholds {
    fn default() -> Self {
        Self::from_config(&FingerConfig::default())
    }
}

/// 関節角度の合計を状態値に離散化
///
/// 閾値 (降順L個) の両端に ±∞ を付けた L+1 帯域を上から走査し、
/// `band[i] > sum >= band[i+1]` を満たす最初の i を返す。番兵により
/// どんな実数でも必ずどれかの帯域に落ちる。
pub fn finger_state(angle_sum: f32, thresholds: &[f32]) -> usize {
    let mut bands = Vec::with_capacity(thresholds.len() + 2);
    bands.push(f32::INFINITY);
    bands.extend_from_slice(thresholds);
    bands.push(f32::NEG_INFINITY);

    (0..bands.len() - 1)
        .find(|&i| bands[i] > angle_sum && angle_sum >= bands[i + 1])
        .unwrap_or(thresholds.len())
}

/// 親指の2関節 (MCP, IP) の符号付き角度
///
/// 頂点を真ん中にした (lm1, lm2, lm3), (lm2, lm3, lm4)。
pub fn thumb_joint_angles(
    hand: &HandLandmarks,
    handedness: Handedness,
    facing: Facing,
) -> [f32; 2] {
    let cmc = hand.get(LandmarkIndex::ThumbCmc);
    let mcp = hand.get(LandmarkIndex::ThumbMcp);
    let ip = hand.get(LandmarkIndex::ThumbIp);
    let tip = hand.get(LandmarkIndex::ThumbTip);

    [
        thumb_joint_angle(cmc, mcp, ip, handedness, facing),
        thumb_joint_angle(mcp, ip, tip, handedness, facing),
    ]
}

/// 親指以外の3関節 (MCP, PIP, DIP) の符号なし角度
pub fn finger_joint_angles(hand: &HandLandmarks, finger: Finger) -> [f32; 3] {
    let m = finger.base_index();
    let wrist = hand.at(0);

    [
        joint_angle(wrist, hand.at(m), hand.at(m + 1)),
        joint_angle(hand.at(m), hand.at(m + 1), hand.at(m + 2)),
        joint_angle(hand.at(m + 1), hand.at(m + 2), hand.at(m + 3)),
    ]
}

/// 親指状態の表示名 (レンダラー向け)
pub fn thumb_state_name(state: usize) -> &'static str {
    match state {
        0 => "straight",
        1 => "bent",
        2 => "closed",
        _ => "unknown",
    }
}

/// 親指以外の状態の表示名 (レンダラー向け)
pub fn finger_state_name(state: usize) -> &'static str {
    match state {
        0 => "straight",
        1 => "claw",
        2 => "bent",
        3 => "closed",
        4 => "clenched",
        _ => "unknown",
    }
}
