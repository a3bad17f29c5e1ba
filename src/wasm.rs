// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser.
//!
//! The page script keeps running the index lookup itself; it hands each hit's
//! match metadata to `HitmarkHighlighter` and gets plain objects back.
//! Match positions are taken as JavaScript string indices (UTF-16 code units),
//! which is what lunr reports; pass `offsetUnit: "chars"` for an index that
//! counts codepoints.
//!
//! ```js
//! const hl = new HitmarkHighlighter({ contextRadius: 45 });
//! const prepared = hl.prepareQuery(input.value);
//! if (prepared.status !== "ok") { showMessage(prepared.status); return; }
//! const hits = index.search(prepared.query);
//! const { total, pages } = hl.highlightHits(pagesIndex, hits);
//! // pages[i].fields.content = [{kind: "plain", text}, {kind: "highlighted", text}, {kind: "ellipsis"}]
//! ```

use crate::config::{ExcerptConfig, RequestedOffsetUnit};
use crate::error::QueryError;
use crate::highlight::Highlighter;
use crate::types::{MatchMetadata, Page, SearchHit};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

/// Outcome of `prepareQuery` for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PreparedQueryOutput {
    /// "ok", "blank", or "noExecutableQuery"
    status: &'static str,
    normalized: String,
    query: String,
}

/// Serialize with maps as plain objects rather than ES `Map`s.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string().into())
}

/// WASM-accessible excerpt highlighter.
#[wasm_bindgen]
pub struct HitmarkHighlighter {
    inner: Highlighter,
}

#[wasm_bindgen]
impl HitmarkHighlighter {
    /// Create a highlighter. `config` may be `undefined` for defaults.
    /// `offsetUnit` defaults to `"utf16"` here.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<HitmarkHighlighter, JsValue> {
        let (config, requested): (ExcerptConfig, RequestedOffsetUnit) =
            if config.is_undefined() || config.is_null() {
                (ExcerptConfig::default(), RequestedOffsetUnit::default())
            } else {
                (
                    from_value(config.clone()).map_err(|e| e.to_string())?,
                    from_value(config).map_err(|e| e.to_string())?,
                )
            };
        let config = config.with_browser_offsets(requested);
        config.validate().map_err(|e| e.to_string())?;
        Ok(HitmarkHighlighter {
            inner: Highlighter::new(config),
        })
    }

    /// Normalize and filter a raw query.
    #[wasm_bindgen(js_name = prepareQuery)]
    pub fn prepare_query(&self, raw: &str) -> Result<JsValue, JsValue> {
        let output = match self.inner.prepare_query(raw) {
            Ok(prepared) => PreparedQueryOutput {
                status: "ok",
                normalized: prepared.normalized,
                query: prepared.query,
            },
            Err(QueryError::Blank) => PreparedQueryOutput {
                status: "blank",
                normalized: String::new(),
                query: String::new(),
            },
            Err(QueryError::NoExecutableQuery) => PreparedQueryOutput {
                status: "noExecutableQuery",
                normalized: crate::query::normalize_query(raw),
                query: String::new(),
            },
        };
        to_js(&output)
    }

    /// Render one page with one hit's `matchData.metadata`.
    #[wasm_bindgen(js_name = highlightPage)]
    pub fn highlight_page(&self, reference: &str, page: JsValue, metadata: JsValue) -> Result<JsValue, JsValue> {
        let page: Page = from_value(page).map_err(|e| e.to_string())?;
        let metadata: MatchMetadata = from_value(metadata).map_err(|e| e.to_string())?;
        let rendered = self.inner.highlight_page(reference, 0.0, &page, &metadata);
        to_js(&rendered)
    }

    /// Render a result list: `pages` is the page array, `hits` the index results.
    #[wasm_bindgen(js_name = highlightHits)]
    pub fn highlight_hits(&self, pages: JsValue, hits: JsValue) -> Result<JsValue, JsValue> {
        let pages: Vec<Page> = from_value(pages).map_err(|e| e.to_string())?;
        let hits: Vec<SearchHit> = from_value(hits).map_err(|e| e.to_string())?;
        let list = self.inner.highlight_hits(&pages, &hits);
        to_js(&list)
    }
}
