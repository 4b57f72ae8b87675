use std::sync::Arc;

use studyhub::application::ports::FetchError;
use studyhub::application::services::{
    GenerationStage, StudyMaterialError, StudyMaterialService, prompts,
};

use crate::helpers::mocks::{
    ScriptedLlmClient, StaticDocumentFetcher, TEST_MODEL, Utf8FileLoader, numbered_lines,
    study_material_service,
};

type TestService = StudyMaterialService<ScriptedLlmClient, Utf8FileLoader>;

const DOCUMENT_URL: &str = "http://localhost:8000/media/user_1/course_1/topic_1/doc.pdf";

fn setup(
    llm: ScriptedLlmClient,
    document: &str,
) -> (Arc<ScriptedLlmClient>, Arc<StaticDocumentFetcher>, TestService) {
    let llm = Arc::new(llm);
    let fetcher = Arc::new(StaticDocumentFetcher::serving(document));
    let service = study_material_service(Arc::clone(&llm), Arc::clone(&fetcher));
    (llm, fetcher, service)
}

#[tokio::test]
async fn given_twelve_chunks_when_summarizing_then_three_batch_merges_and_one_final_merge() {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), &numbered_lines(2400));

    let summary = service.summarize(DOCUMENT_URL).await.unwrap();

    let requests = llm.requests();
    assert_eq!(requests.len(), 12 + 3 + 1);
    assert!(requests[..12].iter().all(|r| r.system_prompt == prompts::SUMMARY_NOTE));
    assert!(requests[12..].iter().all(|r| r.system_prompt == prompts::SUMMARY_MERGE));

    assert_eq!(
        requests[12].user_content,
        "response 1\n\nresponse 2\n\nresponse 3\n\nresponse 4\n\nresponse 5"
    );
    assert_eq!(requests[14].user_content, "response 11\n\nresponse 12");
    assert_eq!(
        requests[15].user_content,
        "response 13\n\nresponse 14\n\nresponse 15"
    );
    assert_eq!(requests[14].max_tokens, 512);
    assert_eq!(requests[15].max_tokens, 1024);
    assert_eq!(summary, "response 16");
}

#[tokio::test]
async fn given_single_merge_batch_when_summarizing_then_no_final_merge() {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), &numbered_lines(450));

    let summary = service.summarize(DOCUMENT_URL).await.unwrap();

    assert_eq!(llm.call_count(), 3 + 1);
    assert_eq!(summary, "response 4");
}

#[tokio::test]
async fn given_summary_chunks_when_generating_then_requests_use_summary_parameters() {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), "Photosynthesis\nLight");

    service.summarize(DOCUMENT_URL).await.unwrap();

    let first = &llm.requests()[0];
    assert_eq!(first.model, TEST_MODEL);
    assert_eq!(first.user_content, "Photosynthesis\nLight");
    assert_eq!(first.max_tokens, 512);
    assert!((first.temperature - 0.3).abs() < f32::EPSILON);
}

#[tokio::test]
async fn given_backend_fails_on_chunk_two_of_three_when_generating_flashcards_then_single_error_without_partial_result()
 {
    let (llm, _, service) = setup(
        ScriptedLlmClient::numbered().failing_at(2),
        &numbered_lines(600),
    );

    let error = service.flashcards(DOCUMENT_URL).await.unwrap_err();

    match error {
        StudyMaterialError::Backend { stage, .. } => {
            assert_eq!(stage, GenerationStage::Chunk(2))
        }
        other => panic!("expected backend error, got {other:?}"),
    }
    assert_eq!(llm.call_count(), 2);
}

#[tokio::test]
async fn given_failing_merge_when_summarizing_then_error_names_merge_batch() {
    let (_, _, service) = setup(
        ScriptedLlmClient::numbered().failing_at(4),
        &numbered_lines(450),
    );

    let error = service.summarize(DOCUMENT_URL).await.unwrap_err();

    assert!(error.to_string().starts_with("merge batch 1:"));
}

#[tokio::test]
async fn given_responses_with_blank_lines_when_generating_quiz_then_items_split_across_chunks() {
    let (llm, _, service) = setup(
        ScriptedLlmClient::with_responses(&["Q1\nA. x\n\nQ2\nA. y"]),
        &numbered_lines(1000),
    );

    let quiz = service.quiz(DOCUMENT_URL).await.unwrap();

    assert_eq!(llm.call_count(), 2);
    assert!(llm.requests().iter().all(|r| r.system_prompt == prompts::QUIZ));
    assert_eq!(quiz, vec!["Q1\nA. x", "Q2\nA. y", "Q1\nA. x", "Q2\nA. y"]);
}

#[tokio::test]
async fn given_two_chunks_when_generating_quiz_and_flashcards_then_quiz_before_flashcards_per_chunk()
 {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), &numbered_lines(300));

    let output = service.quiz_and_flashcards(DOCUMENT_URL).await.unwrap();

    let prompts_used: Vec<&str> = llm
        .requests()
        .iter()
        .map(|r| {
            if r.system_prompt == prompts::COMBINED_QUIZ {
                "quiz"
            } else {
                "flashcards"
            }
        })
        .collect();
    assert_eq!(prompts_used, vec!["quiz", "flashcards", "quiz", "flashcards"]);
    assert_eq!(output.quiz, "response 1\n\nresponse 3");
    assert_eq!(output.flashcards, vec!["response 2", "response 4"]);
}

#[tokio::test]
async fn given_document_when_generating_then_reference_is_fetched_once() {
    let (_, fetcher, service) = setup(ScriptedLlmClient::numbered(), "content");

    service.flashcards(DOCUMENT_URL).await.unwrap();

    assert_eq!(fetcher.fetched(), vec![DOCUMENT_URL.to_string()]);
}

#[tokio::test]
async fn given_fetch_failure_when_summarizing_then_fetch_error_and_no_generation() {
    let llm = Arc::new(ScriptedLlmClient::numbered());
    let service = study_material_service(
        Arc::clone(&llm),
        Arc::new(StaticDocumentFetcher::not_found()),
    );

    let error = service.summarize(DOCUMENT_URL).await.unwrap_err();

    assert!(matches!(
        error,
        StudyMaterialError::Fetch(FetchError::UnexpectedStatus { status: 404, .. })
    ));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_blank_text_layer_when_generating_then_no_usable_text() {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), "   ");

    let error = service.quiz(DOCUMENT_URL).await.unwrap_err();

    assert!(matches!(error, StudyMaterialError::NoUsableText));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_only_decorative_text_when_generating_then_no_usable_text() {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), "=======\n-------");

    let error = service.summarize(DOCUMENT_URL).await.unwrap_err();

    assert!(matches!(error, StudyMaterialError::NoUsableText));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_no_chunks_when_generating_directly_then_chunking_error() {
    let (llm, _, service) = setup(ScriptedLlmClient::numbered(), "unused");

    let error = service.summarize_chunks(&[]).await.unwrap_err();

    assert!(matches!(error, StudyMaterialError::Chunking));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_padded_backend_output_when_generating_then_parts_are_trimmed() {
    let (_, _, service) = setup(
        ScriptedLlmClient::with_responses(&["  \n card one \n\n"]),
        "content",
    );

    let cards = service.flashcards(DOCUMENT_URL).await.unwrap();

    assert_eq!(cards, vec!["card one"]);
}
