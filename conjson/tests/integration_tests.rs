//! End-to-end tests for the conjson adapters

use conjson::{
    from_slice, to_vec, CamelCaseKeys, ConjsonError, ConventionalKeys, Decoder, Direction,
    Encoder, Marshaler, Pipeline, PipelineConfig, TransformExt, Unmarshaler,
};
use conjson_test_utils::fixtures::EXAMPLE_MODEL_SNAKE_CASE_JSON;
use conjson_test_utils::{ExampleModel, TestDocumentGenerator};
use serde_json::{json, Value};
use std::io::{Seek, SeekFrom};

fn conventional() -> Pipeline {
    Pipeline::new().with(ConventionalKeys::new())
}

#[test]
fn test_marshal_example_model_with_indent() {
    let mut encoder = Encoder::new(Vec::new(), conventional()).with_indent("    ");
    encoder.encode(&ExampleModel::sample()).unwrap();

    let output = String::from_utf8(encoder.into_inner()).unwrap();
    assert_eq!(output, format!("{EXAMPLE_MODEL_SNAKE_CASE_JSON}\n"));
}

#[test]
fn test_unmarshal_example_model() {
    let mut model: Option<ExampleModel> = None;
    Unmarshaler::new(&mut model, conventional())
        .unmarshal_json(EXAMPLE_MODEL_SNAKE_CASE_JSON.as_bytes())
        .unwrap();

    assert_eq!(model, Some(ExampleModel::sample()));
}

#[test]
fn test_marshaler_round_trip() {
    let sample = ExampleModel::sample();
    let encoded = Marshaler::new(&sample, conventional()).marshal_json().unwrap();

    let raw: Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(raw["referred_by_url"], "https://example.com/referrer/index.html");
    assert_eq!(raw["created_at"], "2015-11-17T20:43:31-05:00");

    let decoded: ExampleModel = from_slice(&encoded, &conventional()).unwrap();
    assert_eq!(decoded, sample);
}

#[test]
fn test_camel_case_keys_accepts_any_style() {
    let pipeline = Pipeline::new().with(CamelCaseKeys::new(true));
    let incoming = json!({
        "title": "Example Title",
        "Description": "This is a description.",
        "image-url": "https://example.com/image.png",
        "referredByURL": "https://example.com/referrer/index.html",
        "is_active": true,
        "created_at": "2015-11-17T20:43:31-05:00",
        "UpdatedAt": "2018-12-24T13:21:15-07:00",
    });
    let bytes = serde_json::to_vec(&incoming).unwrap();

    let decoded: ExampleModel = from_slice(&bytes, &pipeline).unwrap();
    assert_eq!(decoded, ExampleModel::sample());
}

#[test]
fn test_camel_case_keys_without_lowering_misses_acronyms() {
    let pipeline = Pipeline::new().with(CamelCaseKeys::new(false));
    let bytes = to_vec(&json!({"referredByURL": "x"}), &Pipeline::new()).unwrap();

    let decoded: Value = from_slice(&bytes, &pipeline).unwrap();
    assert_eq!(decoded, json!({"referredByURL": "x"}));
}

#[test]
fn test_stream_through_file() {
    let mut file = tempfile::tempfile().unwrap();
    let models = vec![ExampleModel::sample(), ExampleModel::sample()];

    {
        let mut encoder = Encoder::new(&mut file, conventional());
        for model in &models {
            encoder.encode(model).unwrap();
        }
        encoder
            .encode(&TestDocumentGenerator::nested_camel_case_document())
            .unwrap();
        encoder.flush().unwrap();
    }

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut decoder = Decoder::new(&mut file, conventional());

    for expected in &models {
        let decoded: ExampleModel = decoder.decode().unwrap().unwrap();
        assert_eq!(&decoded, expected);
    }
    let nested: Value = decoder.decode().unwrap().unwrap();
    assert_eq!(nested, TestDocumentGenerator::nested_camel_case_document());
    assert!(decoder.decode::<Value>().unwrap().is_none());
}

#[test]
fn test_decoder_sees_snake_case_on_disk() {
    let mut file = tempfile::tempfile().unwrap();
    Encoder::new(&mut file, conventional())
        .encode(&TestDocumentGenerator::nested_camel_case_document())
        .unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let raw: Value = Decoder::new(&mut file, Pipeline::new())
        .decode()
        .unwrap()
        .unwrap();
    assert_eq!(raw, TestDocumentGenerator::nested_snake_case_document());
}

#[test]
fn test_decode_errors_propagate() {
    let err = from_slice::<ExampleModel>(br#"{"title": 5}"#, &conventional()).unwrap_err();
    assert!(matches!(err, ConjsonError::Json(_)));

    let mut decoder = Decoder::new(&b"{\"title\": "[..], conventional());
    assert!(matches!(
        decoder.decode::<Value>(),
        Err(ConjsonError::Json(_))
    ));
}

#[test]
fn test_configured_pipeline_matches_handwritten() {
    let config = PipelineConfig::from_json_str(
        r#"{"transforms": [
            {"type": "only_for_direction", "direction": "unmarshal",
             "transform": {"type": "camel_case_keys", "lower_repeated_caps": true}},
            {"type": "conventional_keys"}
        ]}"#,
    )
    .unwrap();
    let configured = config.build().unwrap();
    let handwritten = Pipeline::new()
        .with(CamelCaseKeys::new(true).only_for(Direction::Unmarshal))
        .with(ConventionalKeys::new());

    let sample = ExampleModel::sample();
    assert_eq!(
        to_vec(&sample, &configured).unwrap(),
        to_vec(&sample, &handwritten).unwrap()
    );

    let incoming = br#"{"referredByURL": "r", "image-url": "i"}"#;
    let a: Value = from_slice(incoming, &configured).unwrap();
    let b: Value = from_slice(incoming, &handwritten).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, json!({"referredByUrl": "r", "imageUrl": "i"}));
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = conventional();
    let sample = ExampleModel::sample();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pipeline = pipeline.clone();
                let sample = &sample;
                scope.spawn(move || {
                    let encoded = to_vec(sample, &pipeline).unwrap();
                    from_slice::<ExampleModel>(&encoded, &pipeline).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), sample);
        }
    });
}
