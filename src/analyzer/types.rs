use serde::Serialize;

/// Per-signature aggregate for one file.
///
/// Created on the first qualifying match, so a record with a zero count
/// never exists. `first_seen`/`last_seen` hold display timestamps and stay
/// unset only for lines the extractor could not slice a timestamp from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OccurrenceRecord {
    pub count: u64,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
}

/// One signature's row in a file's analysis, in first-match order until
/// ranked.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureHit {
    pub name: &'static str,
    #[serde(flatten)]
    pub record: OccurrenceRecord,
}

/// Everything the engine learned about a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub file: String,
    pub hits: Vec<SignatureHit>,
    /// Lines that matched a signature but carried no extractable timestamp.
    pub malformed_lines: u64,
}

impl FileAnalysis {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            hits: Vec::new(),
            malformed_lines: 0,
        }
    }

    /// Record one qualifying match. `seen_at` is the display timestamp, when
    /// one could be extracted from the line.
    pub fn record(&mut self, name: &'static str, seen_at: Option<&str>) {
        let idx = match self.hits.iter().position(|h| h.name == name) {
            Some(idx) => idx,
            None => {
                self.hits.push(SignatureHit {
                    name,
                    record: OccurrenceRecord::default(),
                });
                self.hits.len() - 1
            }
        };

        let record = &mut self.hits[idx].record;
        record.count += 1;
        if let Some(ts) = seen_at {
            if record.first_seen.is_none() {
                record.first_seen = Some(ts.to_string());
            }
            record.last_seen = Some(ts.to_string());
        }
    }

    pub fn is_clean(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn signature_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.hits.iter().map(|h| h.name)
    }
}

/// The whole run, for the JSON reporter and for tests.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub version: String,
    pub generated_at: String,
    pub files: Vec<FileAnalysis>,
    pub clean_files: Vec<String>,
    pub signatures_seen: Vec<&'static str>,
}
