use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{ImageEncoder, Rgb, RgbImage};

use crate::skin_analysis::{
    AnalysisContext, AnalysisError, Result, SkinClassifier, SkinTypeClassifier, TextInfoTable,
    analyze_upload_in, coverage::SkinCoverage, normalize::INPUT_SHAPE, NormalizedTensor,
};

const SKIN: Rgb<u8> = Rgb([220, 170, 150]);
const RESISTANT_SKIN: Rgb<u8> = Rgb([200, 150, 120]);

struct MockClassifier {
    score: f32,
    should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    fn scoring(score: f32) -> Self {
        Self {
            score,
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::scoring(0.0)
        }
    }
}

impl SkinClassifier for MockClassifier {
    fn score(&self, input: &NormalizedTensor) -> Result<f32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(input.shape(), &INPUT_SHAPE);
        if self.should_fail {
            return Err(AnalysisError::Inference("Mock inference error".to_string()));
        }
        Ok(self.score)
    }
}

fn full_table() -> TextInfoTable {
    TextInfoTable::from_json_str(include_str!("../../text_info.json")).unwrap()
}

fn classifier_with(oily: MockClassifier, pigmentation: MockClassifier, table: TextInfoTable) -> SkinTypeClassifier {
    let context = AnalysisContext::with_custom(
        Box::new(oily),
        Box::new(pigmentation),
        Box::new(MockClassifier::failing()),
        table,
    );
    SkinTypeClassifier::with_context(Arc::new(context))
}

fn classifier(oily: f32, pigmentation: f32) -> SkinTypeClassifier {
    classifier_with(
        MockClassifier::scoring(oily),
        MockClassifier::scoring(pigmentation),
        full_table(),
    )
}

fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), img.width(), img.height(), image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

#[test]
fn test_end_to_end_orn() {
    let img = RgbImage::from_pixel(64, 64, RESISTANT_SKIN);
    let result = classifier(0.5, 0.1).classify(&img).unwrap();

    assert_eq!(result.skin_type.to_string(), "ORNT");
    assert_eq!(result.short_info, full_table().lookup(&result.skin_type).unwrap());
    assert_eq!(result.skin_percentage, 100.0);
}

#[test]
fn test_sensitive_color_sets_second_letter() {
    let img = RgbImage::from_pixel(64, 64, SKIN);
    let result = classifier(0.1, 0.9).classify(&img).unwrap();
    assert_eq!(result.skin_type.to_string(), "DSPT");
}

#[test]
fn test_threshold_boundaries() {
    let img = RgbImage::from_pixel(32, 32, RESISTANT_SKIN);
    let code = |oily, pigmentation| {
        classifier(oily, pigmentation)
            .classify(&img)
            .unwrap()
            .skin_type
            .to_string()
    };

    assert_eq!(code(0.3, 0.2), "DRNT");
    assert_eq!(code(0.30001, 0.2), "ORNT");
    assert_eq!(code(0.3, 0.20001), "DRPT");
}

#[test]
fn test_deterministic() {
    let img = RgbImage::from_fn(80, 60, |x, _| {
        if x < 20 {
            Rgb([40, 90, 200])
        } else {
            RESISTANT_SKIN
        }
    });
    let analyzer = classifier(0.42, 0.17);

    let first = analyzer.classify(&img).unwrap();
    let second = analyzer.classify(&img).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_insufficient_skin_skips_classifiers() {
    let oily = MockClassifier::scoring(0.9);
    let calls = oily.calls.clone();
    let analyzer = classifier_with(oily, MockClassifier::scoring(0.9), full_table());

    let img = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
    let err = analyzer.classify(&img).unwrap_err();

    assert!(matches!(err, AnalysisError::InsufficientSkinArea { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reported_percentage_comes_from_validation() {
    let img = RgbImage::from_pixel(64, 64, RESISTANT_SKIN);
    let result = classifier(0.5, 0.1)
        .compose(&img, SkinCoverage::new(42.126))
        .unwrap();
    assert_eq!(result.skin_percentage, 42.13);
}

#[test]
fn test_unrecognized_classification() {
    let table = TextInfoTable::from_json_str(r#"{"DRNT": "dry"}"#).unwrap();
    let analyzer = classifier_with(MockClassifier::scoring(0.5), MockClassifier::scoring(0.1), table);

    let img = RgbImage::from_pixel(64, 64, RESISTANT_SKIN);
    let err = analyzer.classify(&img).unwrap_err();
    assert!(matches!(err, AnalysisError::UnrecognizedClassification(ref c) if c == "ORNT"));
}

#[test]
fn test_classifier_failure_is_typed() {
    let analyzer = classifier_with(MockClassifier::failing(), MockClassifier::scoring(0.1), full_table());
    let img = RgbImage::from_pixel(64, 64, RESISTANT_SKIN);
    assert!(matches!(analyzer.classify(&img), Err(AnalysisError::Inference(_))));
}

#[test]
fn test_classify_bytes() {
    let png = encode_png(&RgbImage::from_pixel(40, 40, RESISTANT_SKIN));
    let result = classifier(0.1, 0.5).classify_bytes(&png).unwrap();
    assert_eq!(result.skin_type.to_string(), "DRPT");
}

#[test]
fn test_corrupt_bytes_are_a_decode_error() {
    let result = classifier(0.5, 0.5).classify_bytes(&[0xFF, 0xD8, 0xFF, 0x00, 0x13]);
    assert!(matches!(result, Err(AnalysisError::Decode(_))));
}

#[test]
fn test_result_json_shape() {
    let img = RgbImage::from_pixel(64, 64, RESISTANT_SKIN);
    let result = classifier(0.5, 0.1).classify(&img).unwrap();

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["skin_type"], "ORNT");
    assert_eq!(json["skin_percentage"], 100.0);
    assert!(json["short_info"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_upload_success_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let png = encode_png(&RgbImage::from_pixel(40, 40, RESISTANT_SKIN));

    let result = analyze_upload_in(&classifier(0.5, 0.1), dir.path(), "selfie.PNG", &png).unwrap();

    assert_eq!(result.skin_type.to_string(), "ORNT");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_upload_failures_clean_up() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer = classifier(0.5, 0.1);

    let dark = encode_png(&RgbImage::from_pixel(40, 40, Rgb([0, 0, 0])));
    assert!(matches!(
        analyze_upload_in(&analyzer, dir.path(), "dark.png", &dark),
        Err(AnalysisError::InsufficientSkinArea { .. })
    ));

    assert!(matches!(
        analyze_upload_in(&analyzer, dir.path(), "broken.jpg", b"not a jpeg"),
        Err(AnalysisError::Decode(_))
    ));

    assert!(matches!(
        analyze_upload_in(&analyzer, dir.path(), "face.bmp", &dark),
        Err(AnalysisError::UnsupportedFormat(_))
    ));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_shared_context_across_threads() {
    let analyzer = Arc::new(classifier(0.5, 0.1));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || {
                let img = RgbImage::from_pixel(32, 32, RESISTANT_SKIN);
                analyzer.classify(&img).unwrap().skin_type.to_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "ORNT");
    }
}
