use serde::Deserialize;

use crate::hand::landmark::{HandLandmarks, Handedness, LandmarkIndex};

/// 手が指している向き (画像座標系)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// カメラに向いている面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// 向きと表裏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub direction: Direction,
    pub facing: Facing,
}

/// MCP 4点 (人差し指〜小指の付け根)
const MCP_JOINTS: [LandmarkIndex; 4] = [
    LandmarkIndex::IndexMcp,
    LandmarkIndex::MiddleMcp,
    LandmarkIndex::RingMcp,
    LandmarkIndex::PinkyMcp,
];

/// 手の向きと表裏を推定
///
/// 向き: MCP 4点の平均位置が手首からどちらの軸へ大きくずれているかで
/// 判定する。x偏差とy偏差が等しい場合は y 側 (up/down) に倒れる。
///
/// 表裏: 向きと直交する軸で親指基部 (lm1) と小指MCP (lm17) を比較する。
/// 「front」の見え方は向きごとに定義が異なり、さらに左右の手で鏡映に
/// なるため、8通りの分岐をそのまま列挙する。
pub fn detect_orientation(hand: &HandLandmarks, handedness: Handedness) -> Orientation {
    let wrist = hand.get(LandmarkIndex::Wrist);
    let thumb = hand.get(LandmarkIndex::ThumbCmc);
    let pinky = hand.get(LandmarkIndex::PinkyMcp);

    let mcp_x_avg = MCP_JOINTS.iter().map(|&i| hand.get(i).x).sum::<f32>() / 4.0;
    let mcp_y_avg = MCP_JOINTS.iter().map(|&i| hand.get(i).y).sum::<f32>() / 4.0;

    let offset_x = (mcp_x_avg - wrist.x).abs();
    let offset_y = (mcp_y_avg - wrist.y).abs();

    let direction = if offset_x > offset_y {
        if mcp_x_avg < wrist.x {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if mcp_y_avg < wrist.y {
        Direction::Up
    } else {
        Direction::Down
    };

    let front = match (direction, handedness) {
        (Direction::Left, Handedness::Left) => thumb.y < pinky.y,
        (Direction::Left, Handedness::Right) => thumb.y > pinky.y,
        (Direction::Right, Handedness::Left) => thumb.y > pinky.y,
        (Direction::Right, Handedness::Right) => thumb.y < pinky.y,
        (Direction::Up, Handedness::Left) => thumb.x > pinky.x,
        (Direction::Up, Handedness::Right) => thumb.x < pinky.x,
        (Direction::Down, Handedness::Left) => thumb.x < pinky.x,
        (Direction::Down, Handedness::Right) => thumb.x > pinky.x,
    };

    Orientation {
        direction,
        facing: if front { Facing::Front } else { Facing::Back },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmark::Landmark;

    /// 手首 + MCP平均 + 親指/小指基部だけを指定した合成ハンド
    fn hand(
        wrist: (f32, f32),
        mcps: [(f32, f32); 4],
        thumb_cmc: (f32, f32),
    ) -> HandLandmarks {
        let mut lms = [Landmark::default(); LandmarkIndex::COUNT];
        lms[0] = Landmark::new(wrist.0, wrist.1, 0.0);
        lms[1] = Landmark::new(thumb_cmc.0, thumb_cmc.1, 0.0);
        for (i, &(x, y)) in mcps.iter().enumerate() {
            lms[5 + 4 * i] = Landmark::new(x, y, 0.0);
        }
        HandLandmarks::new(lms)
    }

    #[test]
    fn test_direction_up() {
        // 小指MCPを含むMCP群が手首の真上
        let h = hand(
            (100.0, 200.0),
            [(90.0, 100.0), (100.0, 100.0), (110.0, 100.0), (120.0, 100.0)],
            (130.0, 180.0),
        );
        let o = detect_orientation(&h, Handedness::Left);
        assert_eq!(o.direction, Direction::Up);
        // 左手・up: 親指x (130) > 小指x (120) → front
        assert_eq!(o.facing, Facing::Front);
    }

    #[test]
    fn test_direction_down() {
        let h = hand(
            (100.0, 100.0),
            [(90.0, 200.0), (100.0, 200.0), (110.0, 200.0), (120.0, 200.0)],
            (130.0, 120.0),
        );
        let o = detect_orientation(&h, Handedness::Left);
        assert_eq!(o.direction, Direction::Down);
        // 左手・down: 親指x (130) < 小指x (120) は偽 → back
        assert_eq!(o.facing, Facing::Back);
    }

    #[test]
    fn test_direction_right() {
        let h = hand(
            (100.0, 100.0),
            [(200.0, 90.0), (200.0, 100.0), (200.0, 110.0), (200.0, 120.0)],
            (120.0, 80.0),
        );
        let o = detect_orientation(&h, Handedness::Right);
        assert_eq!(o.direction, Direction::Right);
        // 右手・right: 親指y (80) < 小指y (120) → front
        assert_eq!(o.facing, Facing::Front);
    }

    #[test]
    fn test_direction_left() {
        let h = hand(
            (200.0, 100.0),
            [(100.0, 90.0), (100.0, 100.0), (100.0, 110.0), (100.0, 120.0)],
            (180.0, 80.0),
        );
        let o = detect_orientation(&h, Handedness::Left);
        assert_eq!(o.direction, Direction::Left);
        // 左手・left: 親指y (80) < 小指y (120) → front
        assert_eq!(o.facing, Facing::Front);
    }

    #[test]
    fn test_equal_offsets_resolve_to_y_branch() {
        // x偏差 = y偏差 = 50 → 厳密比較なので y 側 (up) に倒れる
        let h = hand(
            (100.0, 100.0),
            [(150.0, 50.0), (150.0, 50.0), (150.0, 50.0), (150.0, 50.0)],
            (130.0, 80.0),
        );
        let o = detect_orientation(&h, Handedness::Left);
        assert_eq!(o.direction, Direction::Up);
    }

    #[test]
    fn test_handedness_swap_flips_facing() {
        // 座標は同一のままラベルだけ入れ替えると表裏が反転する
        let h = hand(
            (100.0, 200.0),
            [(90.0, 100.0), (100.0, 100.0), (110.0, 100.0), (120.0, 100.0)],
            (130.0, 180.0),
        );
        let left = detect_orientation(&h, Handedness::Left);
        let right = detect_orientation(&h, Handedness::Right);
        assert_eq!(left.direction, right.direction);
        assert_ne!(left.facing, right.facing);
    }
}
