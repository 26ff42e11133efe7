//! Integration tests for predilex-cli
//!
//! These tests run the batch pipelines over real files in a temporary
//! directory: CSV loading, merging, extraction, scoring and persistence.

use predilex_cli::{loader, pipeline, writer, CliError};
use predilex_domain::{ExtractionResult, FeatureVector, FEATURE_COLUMNS};
use predilex_evaluator::{Evaluator, METRIC_NAMES};
use predilex_extractor::{ExtractionConfig, ExtractionRow};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DOCUMENTS: [(&str, &str); 3] = [
    (
        "Jugement1.txt",
        "Monsieur Jean Dupont, accident survenu le 1 janvier 2020, consolidation le 15 mars 2021",
    ),
    (
        "Jugement2.txt",
        "Madame Lucie Martin a été victime d'un accident le 02/03/2018. Aucune consolidation n'est constatée.",
    ),
    ("Jugement3.txt", "Le tribunal statue sur la demande."),
];

struct Corpus {
    dir: TempDir,
}

impl Corpus {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let texts = dir.path().join("txt_files");
        fs::create_dir(&texts).unwrap();
        for (name, text) in DOCUMENTS {
            fs::write(texts.join(name), text).unwrap();
        }
        fs::write(texts.join("notes.md"), "Monsieur Paul").unwrap();

        fs::write(
            dir.path().join("x_train_ids.csv"),
            "ID,filename\n1,Jugement1.txt\n2,Jugement2.txt\n3,Jugement3.txt\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("y_train.csv"),
            "ID,sexe,date_accident,date_consolidation\n\
             1,homme,2020-01-01,2021-03-15\n\
             2,femme,2018-03-02,n.c.\n\
             3,n.c.,n.c.,n.c.\n",
        )
        .unwrap();

        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn load(corpus: &Corpus, limit: Option<usize>) -> Vec<predilex_domain::PersonRecord> {
    loader::load_records(&corpus.path("x_train_ids.csv"), &corpus.path("y_train.csv"), limit).unwrap()
}

fn pairs(rows: &[ExtractionRow]) -> Vec<(ExtractionResult, ExtractionResult)> {
    rows.iter().map(|row| (row.extracted.clone(), row.truth())).collect()
}

#[tokio::test]
async fn test_end_to_end_extraction_scores_one() {
    let corpus = Corpus::new();
    let records = load(&corpus, None);
    let texts = loader::load_texts(&corpus.path("txt_files"), "txt").await.unwrap();
    assert_eq!(texts.len(), 3);

    let rows = pipeline::run_extraction(&records, &texts, &ExtractionConfig::default(), true);
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0].values(),
        vec![
            "1",
            "Jugement1.txt",
            "homme",
            "homme",
            "2020-01-01",
            "2020-01-01",
            "2021-03-15",
            "2021-03-15",
        ]
    );

    let report = Evaluator::default().score(&pairs(&rows));
    for name in METRIC_NAMES {
        assert_eq!(report.get(name), Some(1.0), "{}", name);
    }
}

#[tokio::test]
async fn test_saved_table_rescores_identically() {
    let corpus = Corpus::new();
    let records = load(&corpus, None);
    let texts = loader::load_texts(&corpus.path("txt_files"), "txt").await.unwrap();
    let rows = pipeline::run_extraction(&records, &texts, &ExtractionConfig::default(), false);

    let output = corpus.path("extraction_results.csv");
    writer::write_extraction_rows(&output, &rows).unwrap();

    let header = fs::read_to_string(&output).unwrap();
    assert!(header.starts_with(&ExtractionRow::COLUMNS.join(",")));

    let evaluator = Evaluator::default();
    let saved = loader::read_extraction_csv(&output).unwrap();
    assert_eq!(saved, pairs(&rows));
    assert_eq!(evaluator.score(&saved), evaluator.score(&pairs(&rows)));

    let metrics = corpus.path("metrics.json");
    writer::write_metrics(&metrics, &evaluator.score(&saved)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(metrics).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), METRIC_NAMES.len());
}

#[tokio::test]
async fn test_feature_table() {
    let corpus = Corpus::new();
    let records = load(&corpus, None);
    let texts = loader::load_texts(&corpus.path("txt_files"), "txt").await.unwrap();
    let rows = pipeline::run_features(&records, &texts, &ExtractionConfig::default(), true);

    let output = corpus.path("features.csv");
    writer::write_feature_rows(&output, &rows).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 5 + FEATURE_COLUMNS.len());
    assert_eq!(&headers[5], "il_count");

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    // Third document has no evidence at all
    let title_gender = headers.iter().position(|h| h == "title_gender").unwrap();
    assert_eq!(&records[2][title_gender], "neutral");
    let accident = headers.iter().position(|h| h == "accident_date").unwrap();
    assert_eq!(&records[1][accident], "2018-03-02");
}

#[tokio::test]
async fn test_missing_document_is_skipped() {
    let corpus = Corpus::new();
    fs::remove_file(corpus.path("txt_files").join("Jugement2.txt")).unwrap();

    let records = load(&corpus, None);
    let texts = loader::load_texts(&corpus.path("txt_files"), "txt").await.unwrap();
    let rows = pipeline::run_extraction(&records, &texts, &ExtractionConfig::default(), true);

    let ids: Vec<i64> = rows.iter().map(|r| r.record.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_empty_document_is_skipped_by_extraction() {
    let corpus = Corpus::new();
    fs::write(corpus.path("txt_files").join("Jugement3.txt"), "").unwrap();

    let records = load(&corpus, None);
    let texts = loader::load_texts(&corpus.path("txt_files"), "txt").await.unwrap();
    assert_eq!(texts.len(), 3);
    let rows = pipeline::run_extraction(&records, &texts, &ExtractionConfig::default(), false);

    let ids: Vec<i64> = rows.iter().map(|r| r.record.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_missing_document_still_gets_feature_row() {
    let corpus = Corpus::new();
    fs::remove_file(corpus.path("txt_files").join("Jugement2.txt")).unwrap();

    let records = load(&corpus, None);
    let texts = loader::load_texts(&corpus.path("txt_files"), "txt").await.unwrap();
    let rows = pipeline::run_features(&records, &texts, &ExtractionConfig::default(), true);

    let ids: Vec<i64> = rows.iter().map(|r| r.record.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(rows[1].features, FeatureVector::default());
    assert_eq!(rows[1].features.values()[10], "n.c.");
}

#[test]
fn test_limit_reads_first_rows() {
    let corpus = Corpus::new();
    let records = load(&corpus, Some(2));
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_missing_column_is_fatal() {
    let corpus = Corpus::new();
    fs::write(corpus.path("y_train.csv"), "ID,sexe,date_accident\n1,homme,n.c.\n").unwrap();

    let result = loader::load_records(&corpus.path("x_train_ids.csv"), &corpus.path("y_train.csv"), None);
    match result {
        Err(CliError::MissingColumn { column, .. }) => assert_eq!(column, "date_consolidation"),
        other => panic!("Expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_unreadable_table_is_fatal() {
    let result = loader::read_ids(Path::new("/nonexistent/ids.csv"), None);
    assert!(result.is_err());
}
