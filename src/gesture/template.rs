use serde::Deserialize;

use crate::analysis::boundary::BoundaryLandmarks;
use crate::analysis::orientation::Direction;
use crate::hand::landmark::Finger;

/// 境界制約: 各スロットに期待するランドマークインデックス
///
/// None のスロットは不問。全スロット None なら制約なしと同義だが、
/// 通常はテンプレート側で boundary 自体を省略する。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundaryRule {
    pub x_max: Option<usize>,
    pub x_min: Option<usize>,
    pub y_max: Option<usize>,
    pub y_min: Option<usize>,
}

impl BoundaryRule {
    /// 指定した全スロットが観測値と一致するか
    pub fn matches(&self, boundary: &BoundaryLandmarks) -> bool {
        let slots = [
            (self.x_max, boundary.x_max),
            (self.x_min, boundary.x_min),
            (self.y_max, boundary.y_max),
            (self.y_min, boundary.y_min),
        ];
        slots
            .iter()
            .all(|(expected, observed)| expected.map_or(true, |e| e == *observed))
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        [self.x_max, self.x_min, self.y_max, self.y_min]
            .into_iter()
            .flatten()
    }
}

/// ジェスチャーテンプレート (設定ファイルから読み込む宣言データ)
///
/// direction は厳密一致のみで「不問」は表現できない。向きを問わない
/// ジェスチャーが必要なら、向きごとにテンプレートを複製して登録する。
#[derive(Debug, Clone, Deserialize)]
pub struct GestureTemplate {
    pub name: String,
    /// 指ごとの許容状態集合 (親指, 人差し指, 中指, 薬指, 小指)
    pub finger_states: [Vec<u8>; Finger::COUNT],
    pub direction: Direction,
    /// 近接を要求するランドマークのペア (省略時は制約なし)
    #[serde(default)]
    pub overlap: Option<Vec<[usize; 2]>>,
    /// 境界制約 (省略時は制約なし)
    #[serde(default)]
    pub boundary: Option<BoundaryRule>,
}

/// 宣言順を保持するテンプレート集
///
/// マッチングは宣言順の先勝ちなので、順序の崩れるマップではなく
/// Vec で持つ。プロセス起動時に一度だけ構築し、以降は読み取り専用。
#[derive(Debug, Clone)]
pub struct GestureLibrary {
    templates: Vec<GestureTemplate>,
}

impl GestureLibrary {
    pub fn new(templates: Vec<GestureTemplate>) -> Self {
        Self { templates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GestureTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_rule_matches_subset() {
        let observed = BoundaryLandmarks {
            x_max: 17,
            x_min: 4,
            y_max: 0,
            y_min: 8,
        };

        let rule = BoundaryRule {
            y_min: Some(8),
            ..Default::default()
        };
        assert!(rule.matches(&observed));

        let rule = BoundaryRule {
            y_min: Some(8),
            x_max: Some(5),
            ..Default::default()
        };
        assert!(!rule.matches(&observed));
    }

    #[test]
    fn test_empty_boundary_rule_always_matches() {
        let observed = BoundaryLandmarks {
            x_max: 1,
            x_min: 2,
            y_max: 3,
            y_min: 4,
        };
        assert!(BoundaryRule::default().matches(&observed));
    }

    #[test]
    fn test_template_deserializes_from_toml() {
        let toml_src = r#"
            name = "pinch"
            finger_states = [[0, 1], [0, 1, 2], [0], [0], [0]]
            direction = "up"
            overlap = [[4, 8]]

            [boundary]
            y_min = 8
        "#;
        let t: GestureTemplate = toml::from_str(toml_src).unwrap();
        assert_eq!(t.name, "pinch");
        assert_eq!(t.direction, Direction::Up);
        assert_eq!(t.finger_states[1], vec![0, 1, 2]);
        assert_eq!(t.overlap.as_deref(), Some(&[[4usize, 8]][..]));
        assert_eq!(t.boundary.unwrap().y_min, Some(8));
    }

    #[test]
    fn test_template_optional_fields_default_to_none() {
        let toml_src = r#"
            name = "open palm"
            finger_states = [[0], [0], [0], [0], [0]]
            direction = "up"
        "#;
        let t: GestureTemplate = toml::from_str(toml_src).unwrap();
        assert!(t.overlap.is_none());
        assert!(t.boundary.is_none());
    }
}
