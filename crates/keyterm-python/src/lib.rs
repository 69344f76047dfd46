//! Python bindings for Keyterm keyword extraction

use keyterm_core::{
    clamp_top_n, ExtractorParams, Keyword as CoreKeyword, KeywordError,
    KeywordExtractor as CoreExtractor, StopwordSet, DEFAULT_DELIMITER, DEFAULT_MIN_TERM_LEN,
};
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

fn to_py_err(err: KeywordError) -> PyErr {
    match err {
        KeywordError::Source(source) => PyOSError::new_err(source.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python-exposed keyword
#[pyclass]
#[derive(Clone)]
pub struct Keyword {
    #[pyo3(get)]
    pub term: String,
    #[pyo3(get)]
    pub count: u32,
    #[pyo3(get)]
    pub frequency: f64,
    #[pyo3(get)]
    pub rank: usize,
}

impl From<CoreKeyword> for Keyword {
    fn from(keyword: CoreKeyword) -> Self {
        Self {
            term: keyword.term,
            count: keyword.count,
            frequency: keyword.frequency,
            rank: keyword.rank,
        }
    }
}

#[pymethods]
impl Keyword {
    fn __repr__(&self) -> String {
        format!(
            "Keyword(term='{}', count={}, frequency={:.4}, rank={})",
            self.term, self.count, self.frequency, self.rank
        )
    }

    fn to_dict(&self) -> HashMap<String, PyObject> {
        Python::with_gil(|py| {
            let mut map = HashMap::new();
            map.insert("term".to_string(), self.term.to_object(py));
            map.insert("count".to_string(), self.count.to_object(py));
            map.insert("frequency".to_string(), self.frequency.to_object(py));
            map.insert("rank".to_string(), self.rank.to_object(py));
            map
        })
    }
}

/// Python-exposed keyword extractor
#[pyclass]
pub struct KeywordExtractor {
    extractor: CoreExtractor,
}

#[pymethods]
impl KeywordExtractor {
    /// Create a keyword extractor
    ///
    /// Args:
    ///     pattern: Regex separating words (default: non-alphanumeric runs)
    ///     min_len: Minimum keyword length (default: 3)
    ///     stopwords: Words to ignore
    ///     stopwords_path: File with one stopword per line, used instead of `stopwords`
    #[new]
    #[pyo3(signature = (
        pattern=DEFAULT_DELIMITER.to_string(),
        min_len=DEFAULT_MIN_TERM_LEN,
        stopwords=None,
        stopwords_path=None,
    ))]
    fn new(
        pattern: String,
        min_len: usize,
        stopwords: Option<Vec<String>>,
        stopwords_path: Option<PathBuf>,
    ) -> PyResult<Self> {
        let stopwords = match (stopwords_path, stopwords) {
            (Some(path), _) => {
                StopwordSet::load(path).map_err(|e| to_py_err(KeywordError::Source(e)))?
            }
            (None, Some(words)) => words.into_iter().collect(),
            (None, None) => StopwordSet::empty(),
        };
        let params = ExtractorParams {
            delimiter: pattern,
            min_term_len: min_len,
        };
        let extractor = CoreExtractor::with_params(&params, stopwords).map_err(to_py_err)?;
        Ok(Self { extractor })
    }

    /// Create an extractor from a JSON parameter object
    ///
    /// Args:
    ///     config: JSON such as '{"delimiter": "\\s+", "min_term_len": 4}'
    ///     english: Use the built-in English stopword list
    #[staticmethod]
    #[pyo3(signature = (config, english=false))]
    fn from_json(config: &str, english: bool) -> PyResult<Self> {
        let params: ExtractorParams =
            serde_json::from_str(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let stopwords = if english {
            StopwordSet::english()
        } else {
            StopwordSet::empty()
        };
        let extractor = CoreExtractor::with_params(&params, stopwords).map_err(to_py_err)?;
        Ok(Self { extractor })
    }

    /// Extract the most frequent keywords
    ///
    /// Returns:
    ///     List of terms, most frequent first
    #[pyo3(signature = (content, top_n=5))]
    fn extract(&self, content: &str, top_n: i64) -> PyResult<Vec<String>> {
        self.extractor
            .extract(content, clamp_top_n(top_n))
            .map_err(to_py_err)
    }

    /// Extract keywords with their counts and frequencies
    ///
    /// Returns:
    ///     List of Keyword objects
    #[pyo3(signature = (content, top_n=5))]
    fn extract_scored(&self, content: &str, top_n: i64) -> PyResult<Vec<Keyword>> {
        let keywords = self
            .extractor
            .extract_scored(content, clamp_top_n(top_n))
            .map_err(to_py_err)?;
        Ok(keywords.into_iter().map(Keyword::from).collect())
    }

    /// Extract keywords from a text file
    #[pyo3(signature = (path, top_n=5))]
    fn extract_file(&self, path: PathBuf, top_n: i64) -> PyResult<Vec<String>> {
        self.extractor
            .extract_from_file(path, clamp_top_n(top_n))
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "KeywordExtractor(stopwords={})",
            self.extractor.stopwords().len()
        )
    }
}

/// Extract keywords in one call
#[pyfunction]
#[pyo3(signature = (content, top_n=5, stopwords=None, pattern=DEFAULT_DELIMITER))]
fn extract_keywords(
    content: &str,
    top_n: i64,
    stopwords: Option<Vec<String>>,
    pattern: &str,
) -> PyResult<Vec<String>> {
    let stopwords: StopwordSet = stopwords.unwrap_or_default().into_iter().collect();
    keyterm_core::extract_keywords(content, clamp_top_n(top_n), &stopwords, pattern)
        .map_err(to_py_err)
}

/// Python module
#[pymodule]
fn keyterm_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<KeywordExtractor>()?;
    m.add_class::<Keyword>()?;
    m.add_function(wrap_pyfunction!(extract_keywords, m)?)?;
    Ok(())
}
