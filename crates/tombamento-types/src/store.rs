//! Store aggregate: both collections and the operations over them

use crate::api::BatchSummary;
use crate::detalhe::Detalhe;
use crate::tombamento::{Status, Tombamento};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether an upsert replaced an existing record or appended a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Everything the service keeps. Serialized as-is to the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub tombamentos: Vec<Tombamento>,
    #[serde(default)]
    pub detalhes: Vec<Detalhe>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tombamento(&self, code: &str) -> Option<&Tombamento> {
        self.tombamentos.iter().find(|t| t.code == code)
    }

    pub fn upsert_tombamento(&mut self, tombamento: Tombamento) -> Upsert {
        upsert_by_code(&mut self.tombamentos, tombamento, |t| &t.code)
    }

    /// Set the status of an existing record. Never inserts.
    pub fn update_status(&mut self, code: &str, status: Status) -> Option<&Tombamento> {
        let tombamento = self.tombamentos.iter_mut().find(|t| t.code == code)?;
        tombamento.status = status;
        Some(tombamento)
    }

    /// Remove every record with `code`. Returns whether anything was removed.
    pub fn remove_tombamento(&mut self, code: &str) -> bool {
        let before = self.tombamentos.len();
        self.tombamentos.retain(|t| t.code != code);
        self.tombamentos.len() < before
    }

    /// Drop the whole collection, returning how many records it held.
    pub fn clear_tombamentos(&mut self) -> usize {
        let count = self.tombamentos.len();
        self.tombamentos.clear();
        count
    }

    pub fn detalhe(&self, code: &str) -> Option<&Detalhe> {
        self.detalhes.iter().find(|d| d.code == code)
    }

    pub fn upsert_detalhe(&mut self, detalhe: Detalhe) -> Upsert {
        upsert_by_code(&mut self.detalhes, detalhe, |d| &d.code)
    }

    /// Upsert each entry in order. Repeated codes inside one batch count as
    /// updates after their first occurrence.
    pub fn upsert_detalhes(&mut self, batch: Vec<Detalhe>) -> BatchSummary {
        let mut summary = BatchSummary {
            count: batch.len(),
            ..Default::default()
        };

        for detalhe in batch {
            match self.upsert_detalhe(detalhe) {
                Upsert::Created => summary.created += 1,
                Upsert::Updated => summary.updated += 1,
            }
        }

        summary
    }

    /// Number of tombamentos per distinct status
    pub fn status_distribution(&self) -> BTreeMap<Status, usize> {
        let mut distribution = BTreeMap::new();
        for tombamento in &self.tombamentos {
            *distribution.entry(tombamento.status).or_insert(0) += 1;
        }
        distribution
    }
}

fn upsert_by_code<T>(items: &mut Vec<T>, item: T, code: impl Fn(&T) -> &str) -> Upsert {
    match items.iter().position(|existing| code(existing) == code(&item)) {
        Some(index) => {
            items[index] = item;
            Upsert::Updated
        }
        None => {
            items.push(item);
            Upsert::Created
        }
    }
}
