use std::error::Error;
use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::Reader;
use tone_core::analyzer::tone_analyzer::ToneAnalyzer;
use tone_core::comment::comment::Comment;
use tone_core::common::tone_exception::{ErrCode, ToneError};
use tone_core::sentiment::lexicon::LexiconOracle;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let path = Path::new(&arg);

    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            if is_comment_export(&path) {
                process_comment_file(&path)?;
            }
        }
    } else {
        process_comment_file(path)?;
    }

    Ok(())
}

fn is_comment_export(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("csv") | Some("json")
    )
}

fn process_comment_file(path: &Path) -> Result<(), Box<dyn Error>> {
    log::info!("Processing file: {:?}", path);

    let comments = match path.extension().and_then(|s| s.to_str()) {
        Some("csv") => read_csv_comments(path)?,
        Some("json") => read_json_comments(path)?,
        _ => {
            return Err(Box::new(ToneError::new(
                format!("unsupported comment export: {:?}", path),
                ErrCode::DataFormatError,
            )))
        }
    };

    if comments.is_empty() {
        return Err(Box::new(ToneError::new(
            format!("no usable comments in {:?}", path),
            ErrCode::NoData,
        )));
    }

    let mut analyzer = ToneAnalyzer::new(Box::new(LexiconOracle::new()));
    for comment in &comments {
        analyzer.ingest(comment)?;
    }

    let report = analyzer.report()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    log::info!(
        "Analyzed {} comments from {:?} (kindness {:.3}, volatility {:.3})",
        report.comment_count,
        path,
        report.kindness,
        report.volatility
    );

    Ok(())
}

fn read_json_comments(path: &Path) -> Result<Vec<Comment>, Box<dyn Error>> {
    let file = File::open(path)?;
    let comments = serde_json::from_reader(file)?;
    Ok(comments)
}

fn read_csv_comments(path: &Path) -> Result<Vec<Comment>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut comments = Vec::new();

    for result in rdr.records() {
        let record = result?;
        comments.push(parse_csv_record(&record)?);
    }

    Ok(comments)
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> Result<&'a str, ToneError> {
    record.get(idx).ok_or_else(|| {
        ToneError::new(
            format!(
                "comment record has {} columns, missing column {}",
                record.len(),
                idx
            ),
            ErrCode::DataFormatError,
        )
    })
}

// Columns: id, parent_id, author, text, like_count, published_at, is_reply
fn parse_csv_record(record: &csv::StringRecord) -> Result<Comment, Box<dyn Error>> {
    let published_at = DateTime::parse_from_rfc3339(field(record, 5)?)?.with_timezone(&Utc);
    let parent_id = field(record, 1)?;

    Ok(Comment {
        id: field(record, 0)?.to_string(),
        parent_id: if parent_id.is_empty() {
            None
        } else {
            Some(parent_id.to_string())
        },
        author: field(record, 2)?.to_string(),
        text: field(record, 3)?.to_string(),
        like_count: field(record, 4)?.parse()?,
        published_at,
        updated_at: None,
        is_reply: field(record, 6)?.parse()?,
    })
}
