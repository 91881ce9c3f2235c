// ABOUTME: Query parameters and page requests for paginated API reads
// ABOUTME: Absent values are dropped at construction so they never reach the request URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

use std::fmt::Display;

use serde::Serialize;

use crate::constants::paging;

/// Ordered set of query parameters attached to a GET request
///
/// Values are stored already stringified. A parameter added with `None`
/// is not stored at all, so it can never be serialized as an empty or
/// "undefined" value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Empty query
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter; `None` is skipped
    #[must_use]
    pub fn param<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.params.push((key.to_owned(), value.to_string()));
        }
        self
    }

    /// Present parameters in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a present parameter
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Number of present parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Page number and page size of a list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Records per page
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: paging::DEFAULT_PAGE,
            page_size: paging::DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Page request from optional CLI values, falling back to the defaults
    #[must_use]
    pub fn from_options(page: Option<u32>, page_size: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            page: page.unwrap_or(defaults.page),
            page_size: page_size.unwrap_or(defaults.page_size),
        }
    }

    /// Query carrying `page` and `pageSize`
    #[must_use]
    pub fn to_query(self) -> Query {
        Query::new()
            .param(paging::PAGE_PARAM, Some(self.page))
            .param(paging::PAGE_SIZE_PARAM, Some(self.page_size))
    }
}
