use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use yubi_gesture::analysis::{finger_state_name, thumb_state_name};
use yubi_gesture::config::Config;
use yubi_gesture::gesture::GestureClassifier;
use yubi_gesture::hand::{HandLandmarks, Handedness};

const CONFIG_PATH: &str = "config.toml";

/// 検出器が書き出した1フレーム分の手
#[derive(Debug, Deserialize)]
struct FrameRecord {
    handedness: String,
    /// 21点 × [x, y, z] (画像ピクセル座標)
    landmarks: Vec<[f32; 3]>,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <frames.json> [config.toml]", args[0]);
    }

    let config_path = args.get(2).map(String::as_str).unwrap_or(CONFIG_PATH);
    let config = Config::load_or_default(config_path);
    let classifier = GestureClassifier::from_config(&config);

    println!("=== Yubi Gesture - フレーム分類 ===");
    println!("設定: {} (テンプレート {}件)", config_path, config.gestures.len());
    println!();

    let content = fs::read_to_string(&args[1])
        .with_context(|| format!("Failed to read frames: {}", args[1]))?;
    let frames: Vec<FrameRecord> =
        serde_json::from_str(&content).context("Failed to parse frames JSON")?;

    for (i, frame) in frames.iter().enumerate() {
        let handedness = Handedness::from_label(&frame.handedness)?;
        let hand = HandLandmarks::from_points(&frame.landmarks)
            .with_context(|| format!("frame {}", i))?;

        let (features, gesture) = classifier.classify(&hand, handedness);

        let states: Vec<&str> = features
            .finger_states
            .iter()
            .enumerate()
            .map(|(f, &s)| {
                if f == 0 {
                    thumb_state_name(s)
                } else {
                    finger_state_name(s)
                }
            })
            .collect();

        println!(
            "frame {:3}: {} {} {} 指=[{}] ジェスチャー: {}",
            i,
            handedness.as_str(),
            features.direction.as_str(),
            features.facing.as_str(),
            states.join(", "),
            gesture.unwrap_or("(一致なし)"),
        );
    }

    Ok(())
}
