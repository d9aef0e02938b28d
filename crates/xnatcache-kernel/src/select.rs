//! Lookups and filters over a cached session.
//!
//! Filters compare against normalized record values, so a legacy FreeSurfer
//! assessor is selected by its canonical proctype just like a generic one.

use crate::assessor::CachedAssessor;
use crate::node::DocumentNode;
use crate::resource::CachedResource;
use crate::scan::CachedScan;
use crate::session::CachedSession;

impl CachedSession {
    /// Scan whose `ID` is `id`.
    pub fn scan(&self, id: &str) -> Option<CachedScan<'_>> {
        self.scans().into_iter().find(|scan| scan.label() == Some(id))
    }

    /// Assessor whose `label` is `label`.
    pub fn assessor(&self, label: &str) -> Option<CachedAssessor<'_>> {
        self.assessors()
            .into_iter()
            .find(|assessor| assessor.label() == Some(label))
    }

    pub fn scans_of_type(&self, types: &[&str]) -> Vec<CachedScan<'_>> {
        self.scans()
            .into_iter()
            .filter(|scan| types.contains(&scan.get("type").unwrap_or("")))
            .collect()
    }

    pub fn scans_with_series_description(&self, descriptions: &[&str]) -> Vec<CachedScan<'_>> {
        self.scans()
            .into_iter()
            .filter(|scan| {
                descriptions.contains(&scan.get("xnat:series_description").unwrap_or(""))
            })
            .collect()
    }

    pub fn assessors_of_proctype(&self, proctypes: &[&str]) -> Vec<CachedAssessor<'_>> {
        self.assessors()
            .into_iter()
            .filter(|assessor| proctypes.contains(&assessor.info().value("proctype")))
            .collect()
    }

    /// Every resource in the session: scan resources first, then each
    /// assessor's inputs followed by its outputs.
    pub fn resources(&self) -> Vec<CachedResource<'_>> {
        let mut resources: Vec<CachedResource<'_>> = self
            .scans()
            .iter()
            .flat_map(CachedScan::resources)
            .collect();
        for assessor in self.assessors() {
            resources.extend(assessor.in_resources());
            resources.extend(assessor.out_resources());
        }
        resources
    }
}

impl<'s> CachedScan<'s> {
    pub fn resource(&self, label: &str) -> Option<CachedResource<'s>> {
        self.resources()
            .into_iter()
            .find(|resource| resource.label() == Some(label))
    }
}

impl<'s> CachedAssessor<'s> {
    pub fn in_resource(&self, label: &str) -> Option<CachedResource<'s>> {
        self.in_resources()
            .into_iter()
            .find(|resource| resource.label() == Some(label))
    }

    pub fn out_resource(&self, label: &str) -> Option<CachedResource<'s>> {
        self.out_resources()
            .into_iter()
            .find(|resource| resource.label() == Some(label))
    }
}
