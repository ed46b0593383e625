use crate::analysis::analyzer::{HandAnalyzer, HandFeatures};
use crate::config::Config;
use crate::gesture::template::{GestureLibrary, GestureTemplate};
use crate::hand::geometry::distance;
use crate::hand::landmark::{HandLandmarks, Handedness, LandmarkIndex};

/// 近接閾値の分母: 手首〜人差し指MCP間距離をこの値で割る
///
/// 手の写る大きさに比例した閾値になるため、カメラとの距離に
/// 依存しない。フレームごとに再計算し、平滑化はしない。
pub const OVERLAP_SPAN_DIVISOR: f32 = 4.5;

/// 1テンプレートあたりの判定項目数
const CHECK_COUNT: u32 = 4;

/// 観測特徴量をテンプレート集と照合し、最初に全項目一致した名前を返す
///
/// 判定は4項目 (指状態 / 向き / 近接 / 境界) の合否のみで、部分一致は
/// 返さない。複数テンプレートが成立し得るポーズは宣言順で決まる
/// (先勝ち)。どれも成立しなければ None。
pub fn match_gesture<'a>(
    hand: &HandLandmarks,
    features: &HandFeatures,
    library: &'a GestureLibrary,
) -> Option<&'a str> {
    let span = distance(
        hand.get(LandmarkIndex::Wrist),
        hand.get(LandmarkIndex::IndexMcp),
    );
    let proximity = span / OVERLAP_SPAN_DIVISOR;

    library
        .iter()
        .find(|template| check_count(hand, features, template, proximity) == CHECK_COUNT)
        .map(|template| template.name.as_str())
}

fn check_count(
    hand: &HandLandmarks,
    features: &HandFeatures,
    template: &GestureTemplate,
    proximity: f32,
) -> u32 {
    let mut count = 0;

    // 指状態: 観測値が各指の許容集合に入っているか
    let states_ok = features
        .finger_states
        .iter()
        .zip(template.finger_states.iter())
        .all(|(state, allowed)| allowed.contains(&(*state as u8)));
    if states_ok {
        count += 1;
    }

    // 向き: 厳密一致のみ
    if template.direction == features.direction {
        count += 1;
    }

    // 近接: 宣言された全ペアが閾値以内
    match &template.overlap {
        None => count += 1,
        Some(pairs) => {
            let overlap_ok = pairs
                .iter()
                .all(|&[a, b]| distance(hand.at(a), hand.at(b)) <= proximity);
            if overlap_ok {
                count += 1;
            }
        }
    }

    // 境界: 宣言された全スロットが一致
    match &template.boundary {
        None => count += 1,
        Some(rule) => {
            if rule.matches(&features.boundary) {
                count += 1;
            }
        }
    }

    count
}

/// 解析とテンプレート照合をまとめた分類器
///
/// テンプレート集と閾値は構築時に固定。フレームごとの呼び出しは
/// 入力のみに依存する純粋な計算で、並列化は呼び出し側の自由。
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    analyzer: HandAnalyzer,
    library: GestureLibrary,
}

impl GestureClassifier {
    pub fn new(analyzer: HandAnalyzer, library: GestureLibrary) -> Self {
        Self { analyzer, library }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            HandAnalyzer::from_config(&config.finger),
            GestureLibrary::new(config.gestures.clone()),
        )
    }

    /// 1フレーム分を分類。特徴量は一致しなくても常に返す。
    pub fn classify(
        &self,
        hand: &HandLandmarks,
        handedness: Handedness,
    ) -> (HandFeatures, Option<&str>) {
        let features = self.analyzer.analyze(hand, handedness);
        let gesture = match_gesture(hand, &features, &self.library);
        (features, gesture)
    }
}
