// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Comparison of a generated model against the server's type catalog

use super::registry::TypeDescriptor;
use super::type_details::TypeDetails;
use crate::error::{IgcError, IgcResult};
use crate::model::PropertyKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindMismatch {
    pub property: String,
    pub local: PropertyKind,
    pub remote: PropertyKind,
}

/// Differences between a generated model and the live type catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    pub type_id: String,
    /// On the server, not in the model
    pub missing_locally: Vec<String>,
    /// In the model, not on the server
    pub missing_remotely: Vec<String>,
    pub kind_mismatches: Vec<KindMismatch>,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.missing_locally.is_empty()
            && self.missing_remotely.is_empty()
            && self.kind_mismatches.is_empty()
    }
}

// Integer and Number both arrive as JSON numbers
fn compatible(local: PropertyKind, remote: PropertyKind) -> bool {
    use PropertyKind::*;
    local == remote || matches!((local, remote), (Integer, Number) | (Number, Integer))
}

pub fn compare(descriptor: &TypeDescriptor, details: &TypeDetails) -> IgcResult<DriftReport> {
    if descriptor.type_id != details.id {
        return Err(IgcError::InvalidParameters(format!(
            "cannot compare model '{}' with server type '{}'",
            descriptor.type_id, details.id
        )));
    }

    let mut report = DriftReport {
        type_id: details.id.clone(),
        ..Default::default()
    };

    for remote in details.properties() {
        match descriptor.property(&remote.name) {
            None => report.missing_locally.push(remote.name.clone()),
            Some(local) if !compatible(local.kind, remote.kind()) => {
                report.kind_mismatches.push(KindMismatch {
                    property: remote.name.clone(),
                    local: local.kind,
                    remote: remote.kind(),
                })
            }
            Some(_) => {}
        }
    }

    for local in descriptor.properties {
        if details.property(local.name).is_none() {
            report.missing_remotely.push(local.name.to_string());
        }
    }

    if !report.is_clean() {
        log::debug!(
            "Model drift for '{}': {} new, {} removed, {} changed",
            report.type_id,
            report.missing_locally.len(),
            report.missing_remotely.len(),
            report.kind_mismatches.len()
        );
    }
    Ok(report)
}
