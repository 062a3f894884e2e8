use crate::application::dto::SelectionRequest;
use crate::build_configuration::domain::{ComponentRecord, Slot};
use crate::build_configuration::services::{CandidateFilter, FilterCriteria};
use crate::ports::outbound::{CatalogRepository, CategoryLabels, ProgressReporter};
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;
use std::sync::Arc;

/// LoadCandidatesUseCase - Holds the candidate set of every slot
///
/// Candidates are fetched from the catalog once per slot and kept as the
/// full set for that slot until [`refresh`](Self::refresh) is called.
/// Filtering and ranking run over these materialized lists; the catalog
/// is never queried during filtering.
///
/// # Type Parameters
/// * `CR` - CatalogRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadCandidatesUseCase<CR, PR> {
    catalog: CR,
    progress_reporter: PR,
    labels: CategoryLabels,
    candidates: [Vec<Arc<ComponentRecord>>; Slot::COUNT],
}

impl<CR, PR> LoadCandidatesUseCase<CR, PR>
where
    CR: CatalogRepository,
    PR: ProgressReporter,
{
    pub fn new(catalog: CR, progress_reporter: PR, labels: CategoryLabels) -> Self {
        Self {
            catalog,
            progress_reporter,
            labels,
            candidates: Default::default(),
        }
    }

    /// Fetches the candidate set of every slot
    ///
    /// # Returns
    /// Total number of candidates loaded
    ///
    /// # Errors
    /// Returns the first catalog failure; slots fetched before it keep
    /// their new candidates
    pub fn load_all(&mut self) -> Result<usize> {
        self.progress_reporter
            .report("📦 Loading catalog candidates for every slot...");

        let mut total = 0;
        for (i, slot) in Slot::ALL.into_iter().enumerate() {
            total += self.fetch(slot)?;
            self.progress_reporter
                .report_progress(i + 1, Slot::COUNT, Some(slot.display_name()));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} candidate(s) across {} slot(s)",
            total,
            Slot::COUNT
        ));

        for slot in Slot::ALL {
            if self.all(slot).is_empty() {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: No candidates found for {} (category '{}')",
                    slot.display_name(),
                    self.labels.label(slot)
                ));
            }
        }

        Ok(total)
    }

    /// Replaces the candidate set of one slot with a fresh catalog fetch
    pub fn refresh(&mut self, slot: Slot) -> Result<usize> {
        let count = self.fetch(slot)?;
        self.progress_reporter.report(&format!(
            "🔄 Refreshed {}: {} candidate(s)",
            slot.display_name(),
            count
        ));
        Ok(count)
    }

    fn fetch(&mut self, slot: Slot) -> Result<usize> {
        let records = self.catalog.fetch_candidates(self.labels.label(slot))?;
        self.candidates[slot.index()] = records.into_iter().map(Arc::new).collect();
        Ok(self.candidates[slot.index()].len())
    }

    /// The full, unfiltered candidate set of a slot in catalog order
    pub fn all(&self, slot: Slot) -> &[Arc<ComponentRecord>] {
        &self.candidates[slot.index()]
    }

    /// Candidates of one slot narrowed and ranked by `criteria`
    pub fn candidates(&self, slot: Slot, criteria: &FilterCriteria) -> Vec<Arc<ComponentRecord>> {
        CandidateFilter::new(criteria.clone()).apply(self.all(slot))
    }

    /// Narrows the combined result list of every slot
    ///
    /// This is the generic search surface: brand, price range and stock
    /// criteria apply across all categories at once.
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<Arc<ComponentRecord>> {
        let combined: Vec<Arc<ComponentRecord>> =
            self.candidates.iter().flatten().cloned().collect();
        CandidateFilter::new(criteria.clone()).apply(&combined)
    }

    /// Looks a component up by id within one slot's candidates
    ///
    /// # Errors
    /// Returns `ConfiguratorError::UnknownComponent` if no candidate has that id
    pub fn find(&self, slot: Slot, id: &str) -> Result<Arc<ComponentRecord>> {
        self.all(slot)
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| {
                ConfiguratorError::UnknownComponent {
                    slot,
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Resolves a selection request to the shared catalog record
    pub fn resolve(&self, request: &SelectionRequest) -> Result<Arc<ComponentRecord>> {
        self.find(request.slot, &request.component_id)
    }
}
