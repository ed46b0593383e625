use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::analysis::orientation::Direction;
use crate::gesture::template::{BoundaryRule, GestureTemplate};
use crate::hand::landmark::{Finger, LandmarkIndex};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub finger: FingerConfig,
    #[serde(default = "default_gestures")]
    pub gestures: Vec<GestureTemplate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FingerConfig {
    /// 親指の状態区切り (ラジアン、降順、2個で3状態)
    #[serde(default = "default_thumb_thresholds")]
    pub thumb_thresholds: Vec<f32>,
    /// 親指以外の状態区切り (ラジアン、降順、4個で5状態)
    #[serde(default = "default_finger_thresholds")]
    pub finger_thresholds: Vec<f32>,
}

fn default_thumb_thresholds() -> Vec<f32> {
    vec![5.7, 4.3]
}

fn default_finger_thresholds() -> Vec<f32> {
    vec![8.9, 7.9, 6.3, 4.5]
}

impl Default for FingerConfig {
    fn default() -> Self {
        Self {
            thumb_thresholds: default_thumb_thresholds(),
            finger_thresholds: default_finger_thresholds(),
        }
    }
}

/// 組み込みのテンプレート集 (設定ファイルで丸ごと差し替え可能)
///
/// 照合は先勝ちなので、条件の狭い pinch を open palm より先に置く。
fn default_gestures() -> Vec<GestureTemplate> {
    let t = |name: &str, finger_states: [Vec<u8>; Finger::COUNT], direction: Direction| {
        GestureTemplate {
            name: name.to_string(),
            finger_states,
            direction,
            overlap: None,
            boundary: None,
        }
    };

    let mut pinch = t(
        "pinch",
        [vec![0, 1], vec![0, 1, 2], vec![0, 1], vec![0, 1], vec![0, 1]],
        Direction::Up,
    );
    pinch.overlap = Some(vec![[Finger::Thumb.tip_index(), Finger::Index.tip_index()]]);

    let mut thumbs_up = t(
        "thumbs up",
        [vec![0], vec![3, 4], vec![3, 4], vec![3, 4], vec![3, 4]],
        Direction::Left,
    );
    thumbs_up.boundary = Some(BoundaryRule {
        y_min: Some(Finger::Thumb.tip_index()),
        ..Default::default()
    });

    vec![
        pinch,
        t(
            "victory",
            [vec![1, 2], vec![0], vec![0], vec![3, 4], vec![3, 4]],
            Direction::Up,
        ),
        t(
            "point",
            [vec![1, 2], vec![0], vec![3, 4], vec![3, 4], vec![3, 4]],
            Direction::Up,
        ),
        thumbs_up,
        t(
            "open palm",
            [vec![0], vec![0], vec![0], vec![0], vec![0]],
            Direction::Up,
        ),
        t(
            "fist",
            [vec![1, 2], vec![4], vec![4], vec![4], vec![4]],
            Direction::Up,
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            finger: FingerConfig::default(),
            gestures: default_gestures(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 読み込みに失敗したらデフォルト設定を返す
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// 設定値の境界検証
    ///
    /// 閾値の降順、テンプレートの状態値とランドマークインデックスを
    /// ここで弾く。以降の照合コードは検証済みを前提に添字アクセスする。
    pub fn validate(&self) -> Result<()> {
        validate_thresholds("thumb_thresholds", &self.finger.thumb_thresholds)?;
        validate_thresholds("finger_thresholds", &self.finger.finger_thresholds)?;

        let thumb_states = self.finger.thumb_thresholds.len() + 1;
        let finger_states = self.finger.finger_thresholds.len() + 1;

        for template in &self.gestures {
            for (i, allowed) in template.finger_states.iter().enumerate() {
                if allowed.is_empty() {
                    bail!(
                        "gesture {:?}: finger {} accepts no state, template can never match",
                        template.name,
                        i
                    );
                }
                let max = if i == 0 { thumb_states } else { finger_states };
                for &state in allowed {
                    if (state as usize) >= max {
                        bail!(
                            "gesture {:?}: finger {} state {} out of range (max {})",
                            template.name,
                            i,
                            state,
                            max - 1
                        );
                    }
                }
            }

            if let Some(pairs) = &template.overlap {
                for &[a, b] in pairs {
                    if a >= LandmarkIndex::COUNT || b >= LandmarkIndex::COUNT {
                        bail!(
                            "gesture {:?}: overlap pair [{}, {}] out of landmark range",
                            template.name,
                            a,
                            b
                        );
                    }
                }
            }

            if let Some(rule) = &template.boundary {
                for index in rule.indices() {
                    if index >= LandmarkIndex::COUNT {
                        bail!(
                            "gesture {:?}: boundary landmark {} out of range",
                            template.name,
                            index
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

fn validate_thresholds(name: &str, thresholds: &[f32]) -> Result<()> {
    if thresholds.is_empty() {
        bail!("{} must not be empty", name);
    }
    for pair in thresholds.windows(2) {
        if pair[0] <= pair[1] {
            bail!("{} must be strictly descending, got {:?}", name, thresholds);
        }
    }
    Ok(())
}
