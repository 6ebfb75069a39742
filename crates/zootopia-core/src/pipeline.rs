//! Fetch → normalize → render → write for one lookup.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ZooConfig;
use crate::fetcher::{AnimalClient, CurlTransport, FetchError, Transport};
use crate::filter::{filter_by_skin_type, SkinSelection};
use crate::model::AnimalRecord;
use crate::normalize::{normalize_records, NormalizeError};
use crate::render;
use crate::storage;

/// Normalized result of one lookup. A failed fetch yields no records and keeps the error.
#[derive(Debug)]
pub struct Lookup {
    pub query: String,
    pub records: Vec<AnimalRecord>,
    pub fetched: usize,
    pub skipped: Vec<(usize, NormalizeError)>,
    pub fetch_error: Option<FetchError>,
}

/// Summary of a written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub path: PathBuf,
    pub fetched: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub fetch_failed: bool,
}

pub struct PagePipeline<T = CurlTransport> {
    client: AnimalClient<T>,
    template_path: PathBuf,
    placeholder: String,
    output_path: PathBuf,
}

impl PagePipeline<CurlTransport> {
    /// Pipeline using the curl transport and the key from the configured environment variable.
    pub fn from_config(cfg: &ZooConfig) -> Self {
        let client = AnimalClient::new(cfg.api_url.clone(), cfg.api_key());
        Self::new(client, cfg)
    }
}

impl<T: Transport> PagePipeline<T> {
    pub fn new(client: AnimalClient<T>, cfg: &ZooConfig) -> Self {
        Self {
            client,
            template_path: cfg.template_path.clone(),
            placeholder: cfg.placeholder.clone(),
            output_path: cfg.output_path.clone(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Fetches and normalizes. Never fails: fetch errors become an empty result.
    pub fn lookup(&self, query: &str) -> Lookup {
        let (raw, fetch_error) = match self.client.fetch(query) {
            Ok(raw) => (raw, None),
            Err(e) => {
                tracing::warn!(query, "lookup failed: {}", e);
                (Vec::new(), Some(e))
            }
        };
        let normalized = normalize_records(&raw);
        Lookup {
            query: query.to_string(),
            fetched: raw.len(),
            records: normalized.records,
            skipped: normalized.skipped,
            fetch_error,
        }
    }

    /// Full run for `query`: lookup, render every record, write the page.
    pub fn generate(&self, query: &str) -> Result<PageReport> {
        let lookup = self.lookup(query);
        self.write_results(&lookup)
    }

    /// Renders all records of `lookup` and writes the page.
    pub fn write_results(&self, lookup: &Lookup) -> Result<PageReport> {
        let body = render::render_results(&lookup.query, &lookup.records);
        self.write_page(lookup, &body, lookup.records.len())
    }

    /// Renders `lookup` through a skin-type selection and writes the page.
    pub fn write_filtered(&self, lookup: &Lookup, selection: &SkinSelection) -> Result<PageReport> {
        let groups = filter_by_skin_type(&lookup.records, selection);
        let rendered = groups.matching.len() + groups.missing.len();
        let body = render::render_filtered(&lookup.query, selection, &groups);
        self.write_page(lookup, &body, rendered)
    }

    fn write_page(&self, lookup: &Lookup, body: &str, rendered: usize) -> Result<PageReport> {
        let template = storage::read_template(&self.template_path)?;
        let html = render::substitute(&template, &self.placeholder, body);
        storage::write_page(&self.output_path, &html)?;
        tracing::info!(
            query = %lookup.query,
            rendered,
            path = %self.output_path.display(),
            "page generated"
        );
        Ok(PageReport {
            path: self.output_path.clone(),
            fetched: lookup.fetched,
            rendered,
            skipped: lookup.skipped.len(),
            fetch_failed: lookup.fetch_error.is_some(),
        })
    }
}
