use super::{
    CompletionResponse, ProviderStream, StopReason, StreamCollector, StreamEvent, collect_stream,
    text_deltas,
};
use futures_util::StreamExt;

fn stream_of(events: Vec<anyhow::Result<StreamEvent>>) -> ProviderStream {
    Box::pin(futures_util::stream::iter(events))
}

#[test]
fn finish_reason_maps_to_stop_reason() {
    assert_eq!(StopReason::from_finish_reason("stop"), StopReason::EndTurn);
    assert_eq!(StopReason::from_finish_reason("length"), StopReason::MaxTokens);
    assert_eq!(
        StopReason::from_finish_reason("content_filter"),
        StopReason::ContentFilter
    );
    assert_eq!(StopReason::from_finish_reason("tool_calls"), StopReason::Other);
}

#[test]
fn collector_concatenates_text_and_keeps_usage() {
    let mut collector = StreamCollector::new();
    collector.feed(&StreamEvent::ResponseStart {
        model: Some("gpt-4o-mini".into()),
    });
    collector.feed(&StreamEvent::TextDelta { text: "John ".into() });
    collector.feed(&StreamEvent::TextDelta {
        text: "delivered.".into(),
    });
    collector.feed(&StreamEvent::Done {
        stop_reason: Some(StopReason::EndTurn),
        input_tokens: Some(12),
        output_tokens: Some(4),
    });

    assert_eq!(
        collector.finish(),
        CompletionResponse {
            text: "John delivered.".into(),
            model: Some("gpt-4o-mini".into()),
            stop_reason: Some(StopReason::EndTurn),
            input_tokens: Some(12),
            output_tokens: Some(4),
        }
    );
}

#[tokio::test]
async fn collect_stream_stops_on_first_error() {
    let stream = stream_of(vec![
        Ok(StreamEvent::TextDelta { text: "par".into() }),
        Err(anyhow::anyhow!("connection reset")),
        Ok(StreamEvent::TextDelta { text: "tial".into() }),
    ]);

    let err = collect_stream(stream).await.unwrap_err();
    assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn text_deltas_drops_lifecycle_events() {
    let stream = stream_of(vec![
        Ok(StreamEvent::ResponseStart { model: None }),
        Ok(StreamEvent::TextDelta { text: "a".into() }),
        Ok(StreamEvent::TextDelta { text: "b".into() }),
        Ok(StreamEvent::Done {
            stop_reason: None,
            input_tokens: None,
            output_tokens: None,
        }),
    ]);

    let chunks: Vec<String> = text_deltas(stream)
        .map(|chunk| chunk.unwrap())
        .collect()
        .await;
    assert_eq!(chunks, vec!["a", "b"]);
}

#[tokio::test]
async fn text_deltas_forwards_errors() {
    let stream = stream_of(vec![Err(anyhow::anyhow!("upstream closed"))]);
    let mut texts = text_deltas(stream);
    assert!(texts.next().await.unwrap().is_err());
}
