use anyhow::{bail, Result};
use nalgebra::Vector2;
use serde::Deserialize;

/// MediaPipe Hands の 21 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkIndex {
    pub const COUNT: usize = 21;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wrist),
            1 => Some(Self::ThumbCmc),
            2 => Some(Self::ThumbMcp),
            3 => Some(Self::ThumbIp),
            4 => Some(Self::ThumbTip),
            5 => Some(Self::IndexMcp),
            6 => Some(Self::IndexPip),
            7 => Some(Self::IndexDip),
            8 => Some(Self::IndexTip),
            9 => Some(Self::MiddleMcp),
            10 => Some(Self::MiddlePip),
            11 => Some(Self::MiddleDip),
            12 => Some(Self::MiddleTip),
            13 => Some(Self::RingMcp),
            14 => Some(Self::RingPip),
            15 => Some(Self::RingDip),
            16 => Some(Self::RingTip),
            17 => Some(Self::PinkyMcp),
            18 => Some(Self::PinkyPip),
            19 => Some(Self::PinkyDip),
            20 => Some(Self::PinkyTip),
            _ => None,
        }
    }
}

/// 検出器が報告する手の左右
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// 検出器のラベル文字列から変換 ("left" / "right" のみ有効)
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => bail!("invalid handedness label: {:?}", other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// 5本の指
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const COUNT: usize = 5;

    pub fn all() -> [Finger; Self::COUNT] {
        [
            Self::Thumb,
            Self::Index,
            Self::Middle,
            Self::Ring,
            Self::Pinky,
        ]
    }

    /// 指先のランドマークインデックス (4, 8, 12, 16, 20)
    pub fn tip_index(self) -> usize {
        4 * (self as usize + 1)
    }

    /// 指の付け根 (親指はCMC、他はMCP) のランドマークインデックス
    pub fn base_index(self) -> usize {
        4 * (self as usize) + 1
    }
}

/// 単一ランドマーク (画像ピクセル座標)
///
/// z は検出器が返す相対深度。角度計算は x, y のみを使う。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 2D成分をベクトルとして取得
    pub fn xy(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

/// 1フレーム分の手ランドマーク21点
///
/// インデックス順は検出器の解剖学的順序に固定。取り込み時に点数を
/// 検証し、以降は読み取り専用で各計算に渡す。
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    points: [Landmark; LandmarkIndex::COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LandmarkIndex::COUNT]) -> Self {
        Self { points }
    }

    /// 検出器出力 (点ごとに [x, y, z]) から構築
    ///
    /// 点数が21でなければエラー。
    pub fn from_points(points: &[[f32; 3]]) -> Result<Self> {
        if points.len() != LandmarkIndex::COUNT {
            bail!(
                "expected {} hand landmarks, got {}",
                LandmarkIndex::COUNT,
                points.len()
            );
        }

        let mut out = [Landmark::default(); LandmarkIndex::COUNT];
        for (i, p) in points.iter().enumerate() {
            out[i] = Landmark::new(p[0], p[1], p[2]);
        }
        Ok(Self::new(out))
    }

    /// インデックスでランドマークを取得
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.points[index as usize]
    }

    /// 生インデックスで取得 (テンプレートの参照用、0..21 は検証済み前提)
    pub fn at(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.points.iter()
    }
}
